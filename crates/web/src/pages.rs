//! Server-rendered HTML for the admin pages.

use hsnp_core::model::metric::MetricRecord;
use hsnp_core::model::tenant::TenantRow;
use hsnp_core::model::template::TemplateRow;

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f5f6f8;color:#1d2330}\
.layout{display:flex;min-height:100vh}\
.sidebar{width:200px;background:#1d2330;color:#fff;padding:1.5rem}\
.sidebar nav{display:flex;flex-direction:column;gap:.75rem}\
.sidebar a{color:#c9d1e0;text-decoration:none}\
.content{flex:1;padding:2rem}\
.card-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem}\
.card{background:#fff;border-radius:8px;padding:1rem;box-shadow:0 1px 2px rgba(0,0,0,.08)}\
.card .value{font-size:2rem;margin:.5rem 0}\
.badge{background:#e8edf7;border-radius:999px;padding:.2rem .6rem;font-size:.8rem}\
.table{width:100%;border-collapse:collapse;background:#fff}\
.table th,.table td{text-align:left;padding:.6rem;border-bottom:1px solid #e4e7ec}";

// Replaces the server-rendered cards once, on a successful fetch only. A
// payload that is not an array of complete records with unique labels is
// treated as a failed fetch and leaves the fallback in place.
pub(crate) const DASHBOARD_LOADER: &str = "\
(function(){\
var grid=document.getElementById('metrics');\
function valid(rows){\
if(!Array.isArray(rows)){return false;}\
var seen={};\
return rows.every(function(m){\
if(m===null||typeof m!=='object'){return false;}\
if(typeof m.label!=='string'||typeof m.value!=='string'||typeof m.sublabel!=='string'){return false;}\
if(Object.prototype.hasOwnProperty.call(seen,m.label)){return false;}\
seen[m.label]=true;return true;});}\
fetch('/api/demo-metrics')\
.then(function(r){if(!r.ok){throw new Error(r.status);}return r.json();})\
.then(function(rows){\
if(!valid(rows)){return;}\
grid.replaceChildren.apply(grid,rows.map(function(m){\
var card=document.createElement('div');card.className='card';card.dataset.key=m.label;\
var h=document.createElement('h3');h.textContent=m.label;\
var p=document.createElement('p');p.className='value';p.textContent=m.value;\
var s=document.createElement('span');s.className='badge';s.textContent=m.sublabel;\
card.append(h,p,s);return card;}));})\
.catch(function(){});\
})();";

pub fn render_dashboard(records: &[MetricRecord]) -> String {
    let mut body = String::with_capacity(1_024);
    body.push_str("<h2>Delivery Snapshot</h2>\n<div class=\"card-grid\" id=\"metrics\">\n");
    for record in records {
        body.push_str(&render_card(record));
    }
    body.push_str("</div>\n<script>");
    body.push_str(DASHBOARD_LOADER);
    body.push_str("</script>\n");
    layout(&body)
}

pub fn render_card(record: &MetricRecord) -> String {
    format!(
        "<div class=\"card\" data-key=\"{}\"><h3>{}</h3><p class=\"value\">{}</p>\
         <span class=\"badge\">{}</span></div>\n",
        html_escape(&record.label),
        html_escape(&record.label),
        html_escape(&record.value),
        html_escape(&record.sublabel),
    )
}

pub fn render_tenants(rows: &[TenantRow]) -> String {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|t| [&*t.name, &*t.plan, &*t.sends_per_day, &*t.status])
        .collect();
    layout(&render_table(
        "Tenants",
        ["Name", "Plan", "Daily Sends", "Status"],
        &cells,
    ))
}

pub fn render_templates(rows: &[TemplateRow]) -> String {
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|t| [&*t.name, &*t.channel, &*t.version, &*t.updated])
        .collect();
    layout(&render_table(
        "Templates",
        ["Name", "Channel", "Version", "Last Updated"],
        &cells,
    ))
}

/// Renders a titled table. The first column doubles as the row key.
fn render_table(title: &str, headers: [&str; 4], rows: &[[&str; 4]]) -> String {
    let mut html = String::with_capacity(1_024);
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(title)));
    html.push_str("<table class=\"table\">\n<thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", html_escape(header)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str(&format!("<tr data-key=\"{}\">", html_escape(row[0])));
        for cell in row {
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn layout(content: &str) -> String {
    let mut html = String::with_capacity(content.len() + 2_048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>HSNP Admin</title>\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<style>",
    );
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"layout\">\n");
    html.push_str("<aside class=\"sidebar\">\n<h1>HSNP</h1>\n<nav>\n");
    html.push_str("<a href=\"/\">Dashboard</a>\n");
    html.push_str("<a href=\"/tenants\">Tenants</a>\n");
    html.push_str("<a href=\"/templates\">Templates</a>\n");
    html.push_str("</nav>\n</aside>\n<main class=\"content\">\n");
    html.push_str(content);
    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use hsnp_core::catalog;

    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<b>&\"</b>"), "&lt;b&gt;&amp;&quot;&lt;/b&gt;");
    }

    #[test]
    fn card_lists_label_value_sublabel_in_order() {
        let html = render_card(&MetricRecord::new("Delivery Rate", "98.7%", "p95 latency 62ms"));
        let label = html.find("<h3>Delivery Rate</h3>").unwrap();
        let value = html.find("98.7%").unwrap();
        let sublabel = html.find("p95 latency 62ms").unwrap();
        assert!(label < value && value < sublabel);
        assert!(html.contains("data-key=\"Delivery Rate\""));
    }

    #[test]
    fn dashboard_renders_every_card_inside_layout() {
        let html = render_dashboard(catalog::demo_metrics());
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        assert!(html.contains("<title>HSNP Admin</title>"));
        assert!(html.contains("<a href=\"/tenants\">Tenants</a>"));
        assert!(html.contains("Delivery Snapshot"));
    }

    #[test]
    fn loader_fetches_once_and_validates_before_replacing() {
        assert_eq!(DASHBOARD_LOADER.matches("fetch(").count(), 1);
        assert!(DASHBOARD_LOADER.contains("fetch('/api/demo-metrics')"));
        let check = DASHBOARD_LOADER.find("if(!valid(rows)){return;}").unwrap();
        let replace = DASHBOARD_LOADER.find("replaceChildren").unwrap();
        assert!(check < replace);
        for field in ["m.label", "m.value", "m.sublabel"] {
            assert!(DASHBOARD_LOADER.contains(&format!("typeof {field}!=='string'")));
        }
        assert!(DASHBOARD_LOADER.contains("hasOwnProperty.call(seen,m.label)"));
        assert!(DASHBOARD_LOADER.contains(".catch(function(){})"));
    }

    #[test]
    fn empty_dashboard_has_no_cards() {
        let html = render_dashboard(&[]);
        assert_eq!(html.matches("class=\"card\"").count(), 0);
    }

    #[test]
    fn tenants_table_has_headers_and_rows() {
        let html = render_tenants(catalog::tenants());
        assert!(html.contains("<th>Daily Sends</th>"));
        assert!(html.contains("<tr data-key=\"Globex\"><td>Globex</td><td>Starter</td><td>1.2k</td><td>Trial</td></tr>"));
    }

    #[test]
    fn templates_table_escapes_cells() {
        let rows = vec![TemplateRow {
            name: "<Promo>".to_string(),
            channel: "Email".to_string(),
            version: "v1".to_string(),
            updated: "now".to_string(),
        }];
        let html = render_templates(&rows);
        assert!(html.contains("<td>&lt;Promo&gt;</td>"));
        assert!(html.contains("<th>Last Updated</th>"));
    }
}
