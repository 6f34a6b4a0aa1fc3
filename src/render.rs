//! Plain-text rendering of sections, search results, and chat turns.
use std::fmt::Write;

use anyhow::{Result, bail};

use crate::assistant::{Speaker, Turn};
use crate::catalog::Section;
use crate::config::MapConfig;
use crate::links::MapEmbed;
use crate::progress::{ActivityKind, Progress};
use crate::search::SearchOutcome;

const NO_RESULTS_HINT: &str = "لم نعثر على نتائج دقيقة. جرب البحث عن كلمات مختلفة مثل \"تكنولوجيا\"، \"نيل\"، أو \"تغيير\" لاستكشاف المحتوى.";

fn check(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// One-line listing entry.
#[must_use]
pub fn section_line(section: &Section) -> String {
    format!(
        "{:<14} {} ({}) — {} نقاط",
        section.id,
        section.title,
        section.category.label(),
        section.points.len()
    )
}

/// Header and listing for a search.
pub fn search_results(outcome: &SearchOutcome<'_>) -> Result<String> {
    let mut out = String::new();
    if outcome.is_active() {
        writeln!(out, "نتائج البحث عن: \"{}\"", outcome.query)?;
        writeln!(out, "وجدنا {} تطابق", outcome.count())?;
        let topics = outcome.matched_categories();
        if !topics.is_empty() {
            let labels: Vec<&str> = topics.iter().map(|c| c.label()).collect();
            writeln!(out, "المحاور المرتبطة: {}", labels.join("، "))?;
        }
        writeln!(out)?;
    }
    if outcome.is_empty() {
        writeln!(out, "{NO_RESULTS_HINT}")?;
    }
    for section in &outcome.matches {
        writeln!(out, "{}", section_line(section))?;
    }
    Ok(out)
}

/// Full view of a section with one point expanded.
pub fn section_detail(
    section: &Section,
    point_index: usize,
    progress: Option<&Progress>,
    map: &MapConfig,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# {}", section.title)?;
    writeln!(out, "{}", section.intro)?;
    writeln!(out)?;

    for (i, p) in section.points.iter().enumerate() {
        let marker = if i == point_index { "▶" } else { " " };
        writeln!(out, "{marker} {}. {}", i + 1, p.text)?;
    }

    if section.has_detail() {
        let Some(point) = section.point(point_index) else {
            bail!(
                "section {} has {} points, no point {}",
                section.id,
                section.points.len(),
                point_index + 1
            );
        };

        writeln!(out)?;
        writeln!(out, "## {}", point.text)?;
        if let Some(def) = &point.definition {
            writeln!(out, "{def}")?;
        }
        if !point.causes.is_empty() {
            writeln!(out, "الأسباب:")?;
            for c in &point.causes {
                writeln!(out, "  - {c}")?;
            }
        }
        if !point.impacts.is_empty() {
            writeln!(out, "الآثار:")?;
            for i in &point.impacts {
                writeln!(out, "  - {i}")?;
            }
        }
        if let Some(ex) = &point.specific_examples {
            writeln!(out, "مثال: {ex}")?;
        }
        if let Some(focus) = &point.map_info {
            writeln!(out)?;
            writeln!(
                out,
                "الخريطة: {} [{}]",
                focus.region_name,
                focus.risk_level.label(section.is_intro())
            )?;
            if !focus.narrative.is_empty() {
                writeln!(out, "{}", focus.narrative)?;
            }
            writeln!(out, "{}", MapEmbed::for_focus(focus, map).url(&map.base_url)?)?;
            for impact in &focus.detailed_impacts {
                writeln!(out, "  * {}: {}", impact.title, impact.description)?;
            }
            for lm in &focus.landmarks {
                writeln!(out, "  @ {} — {}", lm.name, lm.description)?;
            }
        }
    } else {
        writeln!(out, "(لا توجد تفاصيل لهذا القسم)")?;
    }

    if let Some(acts) = &section.activities {
        let done = |kind: ActivityKind| progress.is_some_and(|p| p.is_done(&section.id, kind));
        writeln!(out)?;
        writeln!(out, "الأنشطة:")?;
        writeln!(
            out,
            "  {} فردي: {} — {}",
            check(done(ActivityKind::Individual)),
            acts.individual.title,
            acts.individual.task
        )?;
        writeln!(
            out,
            "  {} جماعي: {} — {}",
            check(done(ActivityKind::Group)),
            acts.group.title,
            acts.group.task
        )?;
        if progress.is_some_and(|p| p.is_complete(&section.id)) {
            writeln!(out, "  أحسنت! أكملت أنشطة هذا المحور.")?;
        }
    }

    if !section.sources.is_empty() {
        writeln!(out)?;
        writeln!(out, "المراجع:")?;
        for s in &section.sources {
            writeln!(out, "  - {} <{}>", s.name, s.url)?;
        }
    }

    Ok(out)
}

/// A chat turn with its citations.
pub fn turn(turn: &Turn) -> Result<String> {
    let mut out = String::new();
    let who = match turn.speaker {
        Speaker::User => "أنت",
        Speaker::Assistant => "المساعد",
    };
    writeln!(out, "{who}: {}", turn.text)?;
    if let Some(citations) = &turn.citations {
        for c in citations {
            writeln!(out, "  📍 {} <{}>", c.title, c.uri)?;
        }
    }
    Ok(out)
}
