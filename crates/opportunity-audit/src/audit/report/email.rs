use std::fmt;

use super::super::engine::AuditResult;
use super::super::knowledge::Solution;
use super::share::{contact_message, whatsapp_link};
use super::views::{score_color, ImpactStyle};

const HEADER_GRADIENT: &str =
    "linear-gradient(135deg,#0a0f2c 0%,#1e3a5f 40%,#2563eb 70%,#00d4ff 100%)";
const DIVIDER: &str = "<tr><td style=\"background:white;padding:0 28px;\"><div style=\"height:1px;background:linear-gradient(to right,transparent,#e2e8f0,transparent);\"></div></td></tr>";

/// Everything the emailed report needs beyond the audit result itself.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub user_name: &'a str,
    pub business_name: &'a str,
    pub brand_name: &'a str,
    pub contact_number: &'a str,
    pub result: &'a AuditResult,
}

pub fn report_subject(business_name: &str, score: u8) -> String {
    format!("🎯 {business_name} — Your AI Opportunity Audit Report (Score: {score}/100)")
}

/// Render the standalone HTML email for an audit result.
///
/// Caller-supplied names are escaped; knowledge-base text is escaped as well so the
/// template stays valid whatever the catalog contains.
pub fn render_report_html(context: &ReportContext<'_>) -> String {
    ReportDocument(context).to_string()
}

struct ReportDocument<'c, 'a>(&'c ReportContext<'a>);

impl fmt::Display for ReportDocument<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, self.0)
    }
}

fn write_document(html: &mut fmt::Formatter<'_>, context: &ReportContext<'_>) -> fmt::Result {
    let result = context.result;
    let color = score_color(result.overall_score);
    let brand = escape_html(context.brand_name);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>\n<head>")?;
    writeln!(html, "  <meta charset=\"utf-8\">")?;
    writeln!(
        html,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(
        html,
        "  <title>Your AI Opportunity Audit Report - {brand}</title>"
    )?;
    writeln!(html, "</head>")?;
    writeln!(
        html,
        "<body style=\"margin:0;padding:0;background:#f1f5f9;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,'Helvetica Neue',Arial,sans-serif;\">"
    )?;
    writeln!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\" style=\"background:#f1f5f9;\"><tr><td align=\"center\" style=\"padding:24px 16px;\">"
    )?;
    writeln!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\" style=\"max-width:600px;\">"
    )?;

    write_header(html, context)?;
    write_score_card(html, result, color)?;
    writeln!(html, "{DIVIDER}")?;
    write_solutions(html, &result.top_solutions)?;
    if !result.quick_wins.is_empty() {
        writeln!(html, "{DIVIDER}")?;
        write_quick_wins(html, &result.quick_wins)?;
    }
    writeln!(html, "{DIVIDER}")?;
    write_actions(html, &result.priority_actions)?;
    write_call_to_action(html, context)?;

    writeln!(
        html,
        "<tr><td style=\"background:white;border-radius:0 0 20px 20px;padding:20px 28px;text-align:center;\">"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:11px;color:#94a3b8;margin-bottom:4px;\">Powered by</div>"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:16px;font-weight:800;color:#0a0f2c;\">{brand}</div>"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:10px;color:#94a3b8;\">✨ AI Automation That Pays For Itself ✨</div>"
    )?;
    writeln!(html, "</td></tr>")?;

    writeln!(html, "</table>\n</td></tr></table>\n</body>\n</html>")
}

fn write_header(html: &mut fmt::Formatter<'_>, context: &ReportContext<'_>) -> fmt::Result {
    writeln!(
        html,
        "<tr><td style=\"background:{HEADER_GRADIENT};border-radius:20px 20px 0 0;padding:32px 28px;text-align:center;\">"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:11px;color:rgba(255,255,255,0.7);text-transform:uppercase;letter-spacing:2px;margin-bottom:12px;\">✨ Your AI Audit Report ✨</div>"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:12px;color:rgba(255,255,255,0.5);margin-bottom:4px;\">{}'s Report</div>",
        escape_html(context.user_name)
    )?;
    writeln!(
        html,
        "<div style=\"font-size:28px;font-weight:800;color:white;margin-bottom:4px;\">{}</div>",
        escape_html(context.business_name)
    )?;
    writeln!(
        html,
        "<div style=\"font-size:13px;color:rgba(0,212,255,0.8);font-weight:500;\">{}</div>",
        escape_html(context.result.sector_name)
    )?;
    writeln!(html, "</td></tr>")
}

fn write_score_card(html: &mut fmt::Formatter<'_>, result: &AuditResult, color: &str) -> fmt::Result {
    writeln!(
        html,
        "<tr><td style=\"background:white;padding:28px;text-align:center;\">"
    )?;
    writeln!(
        html,
        "<div style=\"margin-bottom:8px;\"><span style=\"font-size:64px;font-weight:900;color:{color};line-height:1;\">{}</span><span style=\"font-size:22px;color:#94a3b8;font-weight:600;\">/100</span></div>",
        result.overall_score
    )?;
    writeln!(
        html,
        "<div style=\"display:inline-block;padding:6px 18px;border-radius:20px;background:{color}15;border:1px solid {color}30;\"><span style=\"font-size:13px;font-weight:700;color:{color};text-transform:uppercase;letter-spacing:1px;\">{}</span></div>",
        escape_html(result.ai_readiness_level)
    )?;
    writeln!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\" style=\"margin-top:20px;\"><tr>"
    )?;
    write_metric(
        html,
        "💰 Est. Monthly Savings",
        &escape_html(result.estimated_monthly_savings),
    )?;
    write_metric(
        html,
        "🚀 AI Solutions Found",
        &(result.top_solutions.len() + result.quick_wins.len()).to_string(),
    )?;
    writeln!(html, "</tr></table>")?;
    writeln!(html, "</td></tr>")
}

fn write_metric(html: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(
        html,
        "<td width=\"50%\" style=\"padding:6px;\"><div style=\"border-radius:14px;padding:16px;border:1px solid rgba(37,99,235,0.1);\"><div style=\"font-size:10px;color:#64748b;text-transform:uppercase;letter-spacing:1px;font-weight:600;margin-bottom:6px;\">{label}</div><div style=\"font-size:18px;font-weight:800;color:#0a0f2c;\">{value}</div></div></td>"
    )
}

fn write_section_heading(html: &mut fmt::Formatter<'_>, heading: &str) -> fmt::Result {
    writeln!(
        html,
        "<tr><td style=\"background:white;padding:24px 28px;\"><div style=\"font-size:18px;font-weight:800;color:#0a0f2c;margin-bottom:16px;\">{heading}</div>"
    )?;
    writeln!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\">"
    )
}

fn write_section_end(html: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(html, "</table></td></tr>")
}

fn write_solutions(html: &mut fmt::Formatter<'_>, solutions: &[Solution]) -> fmt::Result {
    write_section_heading(html, "🎯 Top AI Solutions For You")?;
    for (index, solution) in solutions.iter().enumerate() {
        let style = ImpactStyle::for_tier(solution.impact);
        writeln!(
            html,
            "<tr><td style=\"padding:16px 0;border-bottom:1px solid #f1f5f9;\">"
        )?;
        writeln!(
            html,
            "<div style=\"font-weight:800;color:#2563eb;font-size:14px;\">#{}</div>",
            index + 1
        )?;
        writeln!(
            html,
            "<div style=\"font-weight:700;color:#0a0f2c;font-size:15px;margin-bottom:6px;\">{}</div>",
            escape_html(solution.title)
        )?;
        writeln!(
            html,
            "<div style=\"font-size:12px;color:#64748b;line-height:1.5;margin-bottom:8px;\">{}</div>",
            escape_html(solution.description)
        )?;
        writeln!(
            html,
            "<div style=\"margin-bottom:8px;\"><span style=\"display:inline-block;padding:3px 10px;border-radius:20px;font-size:10px;font-weight:700;background:{};color:{};text-transform:uppercase;\"><span style=\"color:{};\">●</span> {} impact</span> <span style=\"display:inline-block;padding:3px 10px;border-radius:20px;font-size:10px;font-weight:600;background:#eff6ff;color:#2563eb;\">⏱ {}</span></div>",
            style.background,
            style.text,
            style.dot,
            solution.impact.id(),
            escape_html(solution.time_to_implement)
        )?;
        writeln!(
            html,
            "<div style=\"border-radius:8px;padding:8px 14px;border:1px solid rgba(37,99,235,0.1);\"><span style=\"font-size:12px;font-weight:700;color:#2563eb;\">📈 {}</span></div>",
            escape_html(solution.estimated_roi)
        )?;
        writeln!(html, "</td></tr>")?;
    }
    write_section_end(html)
}

fn write_quick_wins(html: &mut fmt::Formatter<'_>, quick_wins: &[Solution]) -> fmt::Result {
    write_section_heading(html, "⚡ Quick Wins — Start This Week")?;
    for quick_win in quick_wins {
        writeln!(
            html,
            "<tr><td style=\"padding:12px 0;border-bottom:1px solid #f1f5f9;\">"
        )?;
        writeln!(
            html,
            "<div style=\"font-weight:700;color:#0a0f2c;font-size:14px;margin-bottom:4px;\">⚡ {}</div>",
            escape_html(quick_win.title)
        )?;
        writeln!(
            html,
            "<div style=\"font-size:12px;color:#64748b;line-height:1.4;margin-bottom:6px;\">{}</div>",
            escape_html(quick_win.description)
        )?;
        writeln!(
            html,
            "<span style=\"display:inline-block;padding:2px 8px;border-radius:12px;font-size:10px;font-weight:600;background:#eff6ff;color:#2563eb;margin-right:6px;\">⏱ {}</span><span style=\"display:inline-block;padding:2px 8px;border-radius:12px;font-size:10px;font-weight:600;background:#ecfdf5;color:#047857;\">📈 {}</span>",
            escape_html(quick_win.time_to_implement),
            escape_html(quick_win.estimated_roi)
        )?;
        writeln!(html, "</td></tr>")?;
    }
    write_section_end(html)
}

fn write_actions(html: &mut fmt::Formatter<'_>, actions: &[String]) -> fmt::Result {
    write_section_heading(html, "📋 Your Priority Actions")?;
    for (index, action) in actions.iter().enumerate() {
        writeln!(
            html,
            "<tr><td style=\"padding:10px 0;border-bottom:1px solid #f1f5f9;font-size:14px;color:#374151;font-weight:500;line-height:1.5;\"><strong style=\"color:#2563eb;\">{}.</strong> {}</td></tr>",
            index + 1,
            escape_html(action)
        )?;
    }
    write_section_end(html)
}

fn write_call_to_action(html: &mut fmt::Formatter<'_>, context: &ReportContext<'_>) -> fmt::Result {
    let message = contact_message(context.business_name, context.result.overall_score);
    let link = whatsapp_link(Some(context.contact_number), &message);

    writeln!(
        html,
        "<tr><td style=\"background:white;padding:24px 28px;\"><div style=\"background:{HEADER_GRADIENT};border-radius:16px;padding:28px;text-align:center;\">"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:20px;font-weight:800;color:white;margin-bottom:8px;\">🚀 Ready to Implement?</div>"
    )?;
    writeln!(
        html,
        "<div style=\"font-size:13px;color:rgba(255,255,255,0.6);margin-bottom:20px;line-height:1.5;\">Let's turn these insights into action.<br>We build AI solutions that pay for themselves.</div>"
    )?;
    writeln!(
        html,
        "<a href=\"{}\" style=\"display:inline-block;background:white;color:#0a0f2c;font-weight:700;font-size:15px;padding:14px 32px;border-radius:14px;text-decoration:none;\">💬 Let's Talk on WhatsApp →</a>",
        escape_html(&link)
    )?;
    writeln!(html, "</div></td></tr>")
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::engine::compute;

    fn context(result: &AuditResult) -> ReportContext<'_> {
        ReportContext {
            user_name: "Asha",
            business_name: "Spice <Route>",
            brand_name: "Sol8um",
            contact_number: "919468688354",
            result,
        }
    }

    #[test]
    fn html_lists_every_section_in_order() {
        let result = compute(
            "food-restaurant",
            &["inventory", "orders"],
            "small",
            "basic",
            "growing",
            None,
        );
        let html = render_report_html(&context(&result));

        let solutions = html.find("Top AI Solutions For You").expect("solutions section");
        let quick_wins = html.find("Quick Wins").expect("quick wins section");
        let actions = html.find("Your Priority Actions").expect("actions section");
        assert!(solutions < quick_wins && quick_wins < actions);

        let first = html.find("AI Demand Forecasting").expect("first solution");
        let second = html.find("AI Order Processing Bot").expect("second solution");
        assert!(first < second);
        assert!(html.contains("Asha's Report"));
        assert!(html.contains(&result.overall_score.to_string()));
        assert!(html.contains("https://wa.me/919468688354?text="));
    }

    #[test]
    fn caller_text_is_escaped() {
        let result = compute("food-restaurant", &["inventory"], "small", "basic", "growing", None);
        let html = render_report_html(&context(&result));

        assert!(html.contains("Spice &lt;Route&gt;"));
        assert!(!html.contains("Spice <Route>"));
        assert!(html.contains("Food &amp; Restaurant"));
        assert!(html.contains("Google &amp; Zomato review"));
    }

    #[test]
    fn quick_wins_section_is_omitted_when_empty() {
        let mut result = compute("food-restaurant", &["inventory"], "small", "basic", "growing", None);
        result.quick_wins.clear();
        let html = render_report_html(&context(&result));
        assert!(!html.contains("Quick Wins — Start This Week"));
    }

    #[test]
    fn impact_badges_use_tier_palette() {
        let result = compute("food-restaurant", &["inventory"], "small", "basic", "growing", None);
        let html = render_report_html(&context(&result));
        assert!(html.contains("background:#ecfdf5;color:#047857"));
        assert!(html.contains("background:#fffbeb;color:#b45309"));
        assert!(html.contains("high impact"));
    }

    #[test]
    fn subject_carries_business_and_score() {
        assert_eq!(
            report_subject("Spice Route", 67),
            "🎯 Spice Route — Your AI Opportunity Audit Report (Score: 67/100)"
        );
    }
}
