pub(super) mod auto_ev;
pub(super) mod beauty_health_wellness;
pub(super) mod dealer_distributor;
pub(super) mod ecommerce_d2c;
pub(super) mod education_edtech;
pub(super) mod fashion_jewelry;
pub(super) mod food_restaurant;
pub(super) mod hotel_travel_tourism;
pub(super) mod specialty_services;
