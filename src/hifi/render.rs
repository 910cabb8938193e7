//! # Newsletter Rendering
//!
//! The newsletter is a single fixed template (`templates/newsletter.tmp`) embedded at
//! compile time and compiled once, on first use, into a process-wide minijinja
//! environment.
//!
//! Substitution is plain text: auto-escaping is off and the template's trailing
//! newline is kept, so what the template says is exactly what gets printed.
//! Rendering is a pure function of the list, the cards and the date string.

use crate::error::Result;
use crate::model::{Card, List};
use chrono::{Local, NaiveDate};
use minijinja::Environment;
use once_cell::sync::OnceCell;
use serde::Serialize;

pub const NEWSLETTER_TEMPLATE: &str = include_str!("templates/newsletter.tmp");

const NEWSLETTER_NAME: &str = "newsletter.md";
const DATE_FORMAT: &str = "%d-%m-%Y";

static NEWSLETTER_ENV: OnceCell<Environment<'static>> = OnceCell::new();

fn newsletter_env() -> std::result::Result<&'static Environment<'static>, minijinja::Error> {
    NEWSLETTER_ENV.get_or_try_init(|| compile(NEWSLETTER_TEMPLATE))
}

fn compile(source: &'static str) -> std::result::Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(NEWSLETTER_NAME, source)?;
    Ok(env)
}

/// Data handed to the template for one render.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub list: &'a List,
    pub cards: &'a [Card],
    pub now: &'a str,
}

/// Renders the newsletter for `list` and its `cards`, in the given order.
pub fn render_newsletter(list: &List, cards: &[Card], now: &str) -> Result<String> {
    let env = newsletter_env()?;
    let tmpl = env.get_template(NEWSLETTER_NAME)?;
    Ok(tmpl.render(RenderContext { list, cards, now })?)
}

/// Day-month-year, numeric: `16-10-2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hacks() -> List {
        List::new("l2", "Hacks", "b1")
    }

    fn scenario_cards() -> Vec<Card> {
        vec![
            Card::new("c1", "Parser", "Built a parser", "l2"),
            Card::new("c2", "Proxy", "", "l2"),
        ]
    }

    #[test]
    fn test_format_date_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07-03-2026");
    }

    #[test]
    fn test_header_uses_list_name_and_date() {
        let out = render_newsletter(&hacks(), &[], "16-10-2026").unwrap();
        assert!(out.starts_with(
            "\n% Hacks: WITTY_TITLE\n%\n% 16-10-2026\n\n# Hacks: WITTY_TITLE\n"
        ));
        assert!(out.ends_with("Happy hacking,\n\nAndrew\n"));
    }

    #[test]
    fn test_cards_render_in_order_with_empty_desc() {
        let out = render_newsletter(&hacks(), &scenario_cards(), "16-10-2026").unwrap();
        let expected = "# Hackity Hacks (in pseudo random order)\n\n\
                        \n## Parser\n\nBuilt a parser\n\n\
                        \n## Proxy\n\n\n\n\
                        \n\n# SOME_OTHER_STUFF??";
        assert!(out.contains(expected), "got:\n{out}");
    }

    #[test]
    fn test_no_cards_renders_empty_section() {
        let out = render_newsletter(&hacks(), &[], "x").unwrap();
        assert!(
            out.contains("# Hackity Hacks (in pseudo random order)\n\n\n\n# SOME_OTHER_STUFF??")
        );
        assert!(!out.contains("## "));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let cards = vec![Card::new(
            "c1",
            "<Tags> & \"quotes\"",
            "a < b && c > d",
            "l2",
        )];
        let out = render_newsletter(&hacks(), &cards, "x").unwrap();
        assert!(out.contains("## <Tags> & \"quotes\"\n\na < b && c > d\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let cards = scenario_cards();
        let a = render_newsletter(&hacks(), &cards, "01-01-2026").unwrap();
        let b = render_newsletter(&hacks(), &cards, "01-01-2026").unwrap();
        assert_eq!(a, b);

        let c = render_newsletter(&hacks(), &cards, "02-01-2026").unwrap();
        assert_eq!(a.replace("01-01-2026", "02-01-2026"), c);
    }

    #[test]
    fn test_environment_is_compiled_once() {
        let first = newsletter_env().unwrap();
        let second = newsletter_env().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.get_template(NEWSLETTER_NAME).is_ok());
    }

    #[test]
    fn test_compile_error_keeps_kind_and_line() {
        let err = compile("line one\n{% for card in cards %}\nno end").err().unwrap();
        assert_eq!(err.kind(), minijinja::ErrorKind::SyntaxError);
        assert_eq!(err.name(), Some(NEWSLETTER_NAME));
        assert!(err.line().is_some());

        let rendered = crate::error::HifiError::from(err).to_string();
        assert!(rendered.starts_with("Render error: syntax error"), "{rendered}");
    }

    #[test]
    fn test_multiline_descriptions_pass_through() {
        let cards = vec![Card::new("c1", "Zine", "line one\n\n- bullet\n- bullet", "l2")];
        let out = render_newsletter(&hacks(), &cards, "x").unwrap();
        assert!(out.contains("## Zine\n\nline one\n\n- bullet\n- bullet\n\n"));
    }
}
