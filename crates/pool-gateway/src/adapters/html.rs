//! Minimal server-rendered HTML adapter for the presentation port.
//!
//! All user-supplied text (pool names, job titles) is escaped before it is
//! interpolated into markup.

use crate::ports::render::ViewRenderer;
use shared_types::{Frequency, Pool, RemoteLevel, SalaryEntry};
use std::fmt::Write;

/// Plain HTML renderer with no template engine.
#[derive(Debug, Clone, Default)]
pub struct BasicHtmlRenderer;

impl BasicHtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for BasicHtmlRenderer {
    fn index_page(&self) -> String {
        page(
            "Share salaries anonymously",
            "<h1>Share salaries anonymously</h1>\
             <p>Create a pool, send the link around, and see the numbers once \
             enough people have shared theirs.</p>\
             <form method=\"post\" action=\"/pool\">\
             <label>Pool name <input type=\"text\" name=\"poolName\" maxlength=\"140\" required></label>\
             <label>Minimum number of contributors \
             <input type=\"number\" name=\"minSize\" min=\"1\" value=\"3\" required></label>\
             <button type=\"submit\">Create pool</button>\
             </form>",
        )
    }

    fn submit_form(&self, pool: &Pool) -> String {
        let name = escape(&pool.name);
        let mut body = String::new();
        let _ = write!(
            body,
            "<h1>{name}</h1>\
             <p>Share your own numbers to see this pool's results.</p>\
             <form method=\"post\" action=\"/pool/salary\">\
             <input type=\"hidden\" name=\"id\" value=\"{id}\">\
             <label>Yearly amount <input type=\"number\" name=\"amount\" min=\"0\" required></label>\
             <label>Hours per week <input type=\"number\" name=\"hourswk\" min=\"0\" required></label>\
             <label>Years of experience \
             <input type=\"number\" name=\"yearsexperience\" min=\"0\" required></label>\
             <label>Job title <input type=\"text\" name=\"title\" maxlength=\"100\" required></label>\
             <label>Overtime {overtime}</label>\
             <label>Overtime paid \
             <input type=\"checkbox\" name=\"overtimepaid\" value=\"paid\"></label>\
             <label>Remote work {remote}</label>\
             <label>Travel {travel}</label>\
             <button type=\"submit\">Share</button>\
             </form>",
            id = pool.public_token,
            overtime = frequency_select("overtime"),
            remote = remote_select(),
            travel = frequency_select("travel"),
        );
        page(&name, &body)
    }

    fn insufficient(&self, pool: &Pool) -> String {
        let name = escape(&pool.name);
        let body = format!(
            "<h1>{name}</h1>\
             <p>Not enough people have shared their salary yet. Results stay \
             hidden until this pool reaches {min} contributors.</p>",
            min = pool.min_size,
        );
        page(&name, &body)
    }

    fn listing(&self, pool: &Pool, entries: &[SalaryEntry]) -> String {
        let name = escape(&pool.name);
        let mut rows = String::new();
        for entry in entries {
            let _ = write!(
                rows,
                "<tr><td>{title}</td><td>{amount}</td><td>{hours}</td>\
                 <td>{overtime}</td><td>{paid}</td><td>{remote}</td>\
                 <td>{years}</td><td>{travel}</td></tr>",
                title = escape(&entry.fields.title),
                amount = entry.fields.amount,
                hours = entry.fields.hours_per_week,
                overtime = entry.fields.overtime.as_str(),
                paid = if entry.fields.overtime_paid { "yes" } else { "no" },
                remote = entry.fields.remote.as_str(),
                years = entry.fields.years_experience,
                travel = entry.fields.travel.as_str(),
            );
        }
        let body = format!(
            "<h1>{name}</h1>\
             <table>\
             <tr><th>Title</th><th>Amount</th><th>Hours/wk</th><th>Overtime</th>\
             <th>Overtime paid</th><th>Remote</th><th>Experience (yrs)</th>\
             <th>Travel</th></tr>\
             {rows}\
             </table>",
        );
        page(&name, &body)
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>{title}</title></head><body>{body}</body></html>"
    )
}

fn frequency_select(name: &str) -> String {
    let mut options = String::new();
    for freq in Frequency::all() {
        let _ = write!(
            options,
            "<option value=\"{value}\">{value}</option>",
            value = freq.as_str()
        );
    }
    format!("<select name=\"{name}\" required>{options}</select>")
}

fn remote_select() -> String {
    let mut options = String::new();
    for level in RemoteLevel::all() {
        let _ = write!(
            options,
            "<option value=\"{value}\">{value}</option>",
            value = level.as_str()
        );
    }
    format!("<select name=\"remote\" required>{options}</select>")
}

/// Escape text for interpolation into HTML content or attribute values.
fn escape(text: &str) -> String {
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
