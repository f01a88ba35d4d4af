//! HTML rendering for the dashboard pages.
//!
//! Pages are plain server-rendered HTML. Charts are drawn client-side by
//! Chart.js from a JSON configuration embedded in the page.

use medalboard_core::chart::ChartConfig;
use medalboard_core::{CountryDetail, Destination, HomeSummary, Statistic};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js";

const STYLE: &str = "body{font-family:sans-serif;margin:0 auto;max-width:960px;padding:1rem;color:#04838f}\
h1{text-align:center}\
.tiles{display:flex;gap:1rem;justify-content:center;flex-wrap:wrap}\
.tile{border:2px solid #04838f;border-radius:12px;padding:.5rem 1.5rem;text-align:center}\
.tile .value{font-size:1.6rem;font-weight:bold}\
.chart{position:relative;height:60vh;margin-top:2rem}\
a.back{display:inline-block;margin-bottom:1rem}";

// Slice clicks go through /select/{index} so the server resolves the index
// against the same ordering the chart was built from.
const PIE_SCRIPT: &str = r"
const config = JSON.parse(document.getElementById('chart-config').textContent);
config.options.onClick = (event, elements) => {
  if (elements.length > 0) {
    window.location.href = '/select/' + elements[0].index;
  }
};
config.options.plugins.tooltip = {
  callbacks: {
    title: (items) => '\u{1F3C5} ' + (items[0].label || ''),
    label: (context) => String(context.parsed),
  },
};
const chart = new Chart(document.getElementById('pieChart'), config);
";

const LINE_SCRIPT: &str = r"
const config = JSON.parse(document.getElementById('chart-config').textContent);
const chart = new Chart(document.getElementById('medalsChart'), config);
";

/// Appended to every chart script: the chart is released whenever the page is
/// left, including slice-click navigation.
pub const RELEASE_CHART_SCRIPT: &str =
    "window.addEventListener('pagehide', () => chart.destroy(), { once: true });";

/// Escape text for an HTML text node or attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn tiles(stats: &[Statistic]) -> String {
    let mut out = String::from("<div class=\"tiles\">\n");
    for stat in stats {
        out.push_str(&format!(
            "<div class=\"tile\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
            escape_html(&stat.label),
            stat.value
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Embed a chart config so that no `</script>` inside labels can close the tag.
fn chart_block(canvas: &str, config: &ChartConfig, script: &str) -> String {
    let json = serde_json::to_string(config)
        .unwrap_or_else(|_| String::from("null"))
        .replace("</", "<\\/");
    format!(
        "<div class=\"chart\"><canvas id=\"{canvas}\"></canvas></div>\n\
         <script type=\"application/json\" id=\"chart-config\">{json}</script>\n\
         <script src=\"{CHART_JS}\"></script>\n<script>{script}{RELEASE_CHART_SCRIPT}\n</script>\n"
    )
}

pub fn home(summary: &HomeSummary, chart: &ChartConfig) -> String {
    let mut body = String::from("<h1>Medals per Country</h1>\n");
    body.push_str(&tiles(&summary.tiles));
    if summary.medal_totals.is_empty() {
        body.push_str("<p class=\"empty\">No participation data.</p>\n");
    }
    body.push_str(&chart_block("pieChart", chart, PIE_SCRIPT));
    page("Olympic Games dashboard", &body)
}

pub fn detail(detail: &CountryDetail, chart: &ChartConfig) -> String {
    let mut body = format!(
        "<a class=\"back\" href=\"{}\">&larr; Back</a>\n",
        Destination::Home.path()
    );
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&detail.country)));
    body.push_str(&tiles(&detail.tiles));
    body.push_str(&chart_block("medalsChart", chart, LINE_SCRIPT));
    page(&detail.country, &body)
}

pub fn not_found() -> String {
    let body = format!(
        "<h1>Page not found</h1>\n<p>The page you are looking for does not exist.</p>\n\
         <a class=\"back\" href=\"{}\">Back to the dashboard</a>",
        Destination::Home.path()
    );
    page("Page not found", &body)
}

pub fn loading() -> String {
    page(
        "Olympic Games dashboard",
        "<h1>Olympic Games dashboard</h1>\n<p class=\"loading\">Loading&hellip;</p>",
    )
}

pub fn failure() -> String {
    page(
        "Olympic Games dashboard",
        "<h1>Olympic Games dashboard</h1>\n<p>Something went wrong while preparing this page.</p>",
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use medalboard_core::{ChartRegistry, CountryRecord, ParticipationRecord};

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html("<b>\"Côte\" & 'd'</b>"),
            "&lt;b&gt;&quot;Côte&quot; &amp; &#39;d&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn home_page_embeds_pie_config_and_tiles() {
        let countries = vec![CountryRecord::new(
            1,
            "Italy",
            vec![ParticipationRecord::new(2012, 28, 372)],
        )];
        let summary = HomeSummary::compute(&countries);
        let chart = ChartRegistry::with_defaults()
            .medals_pie(&summary.medal_totals)
            .unwrap();
        let html = home(&summary, &chart);

        assert!(html.contains("Number of Games"));
        assert!(html.contains("id=\"pieChart\""));
        assert!(html.contains("\"type\":\"pie\""));
        assert!(html.contains("/select/"));
    }

    #[test]
    fn both_chart_pages_destroy_their_chart_on_pagehide() {
        let record = CountryRecord::new(1, "Italy", vec![ParticipationRecord::new(2012, 28, 372)]);
        let registry = ChartRegistry::with_defaults();

        let summary = HomeSummary::compute(std::slice::from_ref(&record));
        let pie = registry.medals_pie(&summary.medal_totals).unwrap();
        let view = CountryDetail::compute(&record);
        let line = registry.medals_line(&view.medals_by_year).unwrap();

        for html in [home(&summary, &pie), detail(&view, &line)] {
            let script_start = html.find("const chart = new Chart(").unwrap();
            let release = html.find(RELEASE_CHART_SCRIPT).unwrap();
            assert!(release > script_start);
            assert_eq!(html.matches("pagehide").count(), 1);
        }
    }

    #[test]
    fn pages_without_charts_carry_no_chart_script() {
        for html in [not_found(), loading(), failure()] {
            assert!(!html.contains("new Chart("));
            assert!(!html.contains("pagehide"));
        }
        assert!(not_found().contains("href=\"/\""));
    }

    #[test]
    fn detail_page_escapes_country_name() {
        let record = CountryRecord::new(9, "</script><b>", vec![ParticipationRecord::new(2012, 1, 2)]);
        let view = CountryDetail::compute(&record);
        let chart = ChartRegistry::with_defaults()
            .medals_line(&view.medals_by_year)
            .unwrap();
        let html = detail(&view, &chart);

        assert!(html.contains("&lt;/script&gt;&lt;b&gt;"));
        assert!(!html.contains("</script><b>"));
    }
}
