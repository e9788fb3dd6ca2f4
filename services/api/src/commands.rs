use crate::infra::{collect_intensities, parse_intensity};
use clap::Args;
use opportunity_audit::audit::domain::{
    budget_options, business_size_options, tech_readiness_options, BudgetRange, BusinessSize,
    TechReadiness, TierOption,
};
use opportunity_audit::audit::engine::{AuditRequest, AuditResult};
use opportunity_audit::audit::knowledge::{find_sector, sectors, Solution};
use opportunity_audit::audit::report::{render_report_html, ReportContext};
use opportunity_audit::config::AppConfig;
use opportunity_audit::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AuditRunArgs {
    /// Sector id (see `catalog`)
    #[arg(long)]
    pub(crate) sector: String,
    /// Pain point id within the sector; repeat for several
    #[arg(long = "pain-point", required = true)]
    pub(crate) pain_points: Vec<String>,
    /// Business size id (solo, micro, small, medium, large)
    #[arg(long)]
    pub(crate) size: String,
    /// Tech readiness id (beginner, basic, intermediate, advanced)
    #[arg(long)]
    pub(crate) tech: String,
    /// Monthly budget id (bootstrap, growing, scaling, enterprise)
    #[arg(long)]
    pub(crate) budget: String,
    /// Pain intensity as PAIN_POINT=RATING (0-10); repeat for several
    #[arg(long = "intensity", value_parser = parse_intensity)]
    pub(crate) intensities: Vec<(String, u8)>,
    /// Name used to greet the reader in the HTML report
    #[arg(long, default_value = "there")]
    pub(crate) name: String,
    /// Business name used in the HTML report
    #[arg(long, default_value = "your business")]
    pub(crate) business: String,
    /// Write the emailed HTML report to this path
    #[arg(long)]
    pub(crate) html: Option<PathBuf>,
    /// Print the raw result as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Show pain points and quick wins for a single sector
    #[arg(long)]
    pub(crate) sector: Option<String>,
}

pub(crate) fn run_audit(args: AuditRunArgs) -> Result<(), AppError> {
    let AuditRunArgs {
        sector,
        pain_points,
        size,
        tech,
        budget,
        intensities,
        name,
        business,
        html,
        json,
    } = args;

    let request = AuditRequest {
        sector,
        pain_points,
        business_size: size,
        tech_level: tech,
        budget,
        pain_intensities: collect_intensities(intensities),
    };
    let result = request.evaluate();

    if json {
        let rendered = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        warn_unrecognized(&request);
        render_audit_summary(&request, &result);
    }

    if let Some(path) = html {
        let config = AppConfig::load()?;
        let document = render_report_html(&ReportContext {
            user_name: &name,
            business_name: &business,
            brand_name: &config.campaign.brand_name,
            contact_number: &config.campaign.contact_number,
            result: &result,
        });
        std::fs::write(&path, document)?;
        println!("\nHTML report written to {}", path.display());
    }

    Ok(())
}

fn warn_unrecognized(request: &AuditRequest) {
    if let Some(sector) = find_sector(&request.sector) {
        for id in &request.pain_points {
            if sector.pain_point(id).is_none() {
                println!("note: '{id}' is not a {} pain point; it adds no solutions", sector.short_name);
            }
        }
    }
    if BusinessSize::from_id(&request.business_size).is_none() {
        println!(
            "note: unknown size '{}', using the default multiplier",
            request.business_size
        );
    }
    if TechReadiness::from_id(&request.tech_level).is_none() {
        println!(
            "note: unknown tech level '{}', using the default base score",
            request.tech_level
        );
    }
    if BudgetRange::from_id(&request.budget).is_none() {
        println!("note: unknown budget '{}', no budget bonus applied", request.budget);
    }
}

pub(crate) fn render_audit_summary(request: &AuditRequest, result: &AuditResult) {
    if result.is_unknown_sector() {
        println!(
            "Unknown sector '{}'. Run `catalog` to list sector ids.",
            request.sector
        );
        return;
    }

    let highlights = result.highlights(request);
    println!("AI Opportunity Audit: {}", result.sector_name);
    println!(
        "Score: {}/100 ({} zone, {}) | {}",
        result.overall_score,
        highlights.score_zone_label,
        highlights.score_zone_range,
        result.ai_readiness_level
    );
    println!(
        "Estimated monthly savings: {} | {} solutions found",
        result.estimated_monthly_savings, highlights.solutions_found
    );

    if !highlights.pain_intensities.is_empty() {
        println!("\nPain intensity");
        for view in &highlights.pain_intensities {
            println!("- {}: {}/10 ({})", view.pain_point, view.rating, view.band_label);
        }
    }

    println!("\nTop solutions");
    print_solutions(&result.top_solutions);

    if !result.quick_wins.is_empty() {
        println!("\nQuick wins");
        print_solutions(&result.quick_wins);
    }

    println!("\nPriority actions");
    for (index, action) in result.priority_actions.iter().enumerate() {
        println!("{}. {}", index + 1, action);
    }
}

fn print_solutions(solutions: &[Solution]) {
    for solution in solutions {
        println!(
            "- [{}] {} | {} | {}",
            solution.impact.label(),
            solution.title,
            solution.time_to_implement,
            solution.estimated_roi
        );
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    match args.sector {
        Some(id) => match find_sector(&id) {
            Some(sector) => {
                println!("{} ({})", sector.name, sector.id);
                println!("\nPain points");
                for pain_point in sector.pain_points {
                    match pain_point.description {
                        Some(description) => {
                            println!("- {}: {} ({})", pain_point.id, pain_point.label, description)
                        }
                        None => println!("- {}: {}", pain_point.id, pain_point.label),
                    }
                }
                println!("\nQuick wins");
                print_solutions(sector.quick_wins);
            }
            None => println!("Unknown sector '{id}'."),
        },
        None => {
            println!("Sectors");
            for sector in sectors() {
                println!(
                    "- {}: {} ({} pain points)",
                    sector.id,
                    sector.name,
                    sector.pain_points.len()
                );
            }
            print_tiers("Business sizes", &business_size_options());
            print_tiers("Tech readiness", &tech_readiness_options());
            print_tiers("Monthly budgets", &budget_options());
        }
    }
    Ok(())
}

fn print_tiers(heading: &str, options: &[TierOption]) {
    println!("\n{heading}");
    for option in options {
        println!("- {}: {} ({})", option.id, option.label, option.description);
    }
}
