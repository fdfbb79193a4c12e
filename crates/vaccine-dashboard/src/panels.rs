// File: crates/vaccine-dashboard/src/panels.rs
// Summary: Builders for the four dashboard panels. Each fills the chart in its grid slot.

use chart_core::{
    Annotation, Chart, Color, FontWeight, HAlign, Legend, LegendLocation, LineStyle, Marker, Series, TextBox, Theme,
    VAlign,
};

use crate::data::{self, AgeGroupRecord, DoseRecord, EffectivenessSample};

pub const TITLE_SIZE: f32 = 14.0;
pub const EFFECTIVENESS_LABEL: &str = "Effectiveness (%)";

pub const INFECTION_BLUE: Color = Color::from_rgb(0x2E, 0x86, 0xAB);
pub const HOSPITAL_PLUM: Color = Color::from_rgb(0xA2, 0x3B, 0x72);
pub const DEATH_ORANGE: Color = Color::from_rgb(0xF1, 0x8F, 0x01);
pub const ED_GREEN: Color = Color::from_rgb(0x06, 0xA7, 0x7D);
pub const HOSPITAL_RED: Color = Color::from_rgb(0xD6, 0x22, 0x46);
pub const LOCAL_SALMON: Color = Color::from_rgb(0xFF, 0xA6, 0x9E);
pub const SYSTEMIC_SAND: Color = Color::from_rgb(0xFA, 0xE5, 0xA0);
pub const DOSE_TEAL: Color = Color::from_rgb(0x2A, 0x9D, 0x8F);

const LINE_WIDTH: f32 = 3.0;
const AGE_BAR_WIDTH: f64 = 0.35;
const DOSE_BAR_WIDTH: f64 = 0.3;
const DOSE_BAR_OFFSET: f64 = 0.15;

/// Line chart of effectiveness waning over weeks, with the 6-month death
/// protection as a dashed reference line.
pub fn waning_panel(ax: &mut Chart, infection: &[EffectivenessSample], hospitalization: &[EffectivenessSample], death: f64) {
    ax.add_series(
        Series::line(data::as_points(infection))
            .with_label("Against Infection")
            .with_color(INFECTION_BLUE)
            .with_marker(Marker::Circle)
            .with_line_width(LINE_WIDTH),
    );
    ax.add_series(
        Series::line(data::as_points(hospitalization))
            .with_label("Against Hospitalization")
            .with_color(HOSPITAL_PLUM)
            .with_marker(Marker::Square)
            .with_line_width(LINE_WIDTH),
    );
    ax.add_series(
        Series::hline(death)
            .with_label(format!("Against Death (6mo): {death:.0}%"))
            .with_color(DEATH_ORANGE)
            .with_line_style(LineStyle::Dashed),
    );

    ax.set_title("Vaccine Effectiveness Waning Over Time", TITLE_SIZE, true);
    ax.set_xlabel("Weeks Post-Vaccination");
    ax.set_ylabel(EFFECTIVENESS_LABEL);
    ax.set_ylim(0.0, 100.0);
    ax.legend(LegendLocation::Best);
    ax.set_grid(true, 0.3);
}

/// Grouped bars: ED/UC visits and hospitalization per age group.
/// Groups without a measurement get no bar.
pub fn age_group_panel(ax: &mut Chart, groups: &[AgeGroupRecord]) {
    let half = AGE_BAR_WIDTH / 2.0;
    let bars = |offset: f64, pick: fn(&AgeGroupRecord) -> Option<f64>| -> Vec<(f64, f64)> {
        groups
            .iter()
            .enumerate()
            .filter_map(|(i, g)| pick(g).map(|v| (i as f64 + offset, v)))
            .collect()
    };

    ax.add_series(
        Series::bars(bars(-half, |g| g.ed_uc), AGE_BAR_WIDTH)
            .with_label("ED/UC Visits")
            .with_color(ED_GREEN)
            .with_alpha(0.8),
    );
    ax.add_series(
        Series::bars(bars(half, |g| g.hospitalization), AGE_BAR_WIDTH)
            .with_label("Hospitalization")
            .with_color(HOSPITAL_RED)
            .with_alpha(0.8),
    );

    ax.set_title("Effectiveness by Age Group (Latest Data)", TITLE_SIZE, true);
    ax.set_xticklabels(groups.iter().map(|g| g.label));
    ax.set_ylabel(EFFECTIVENESS_LABEL);
    ax.set_ylim(0.0, 100.0);
    ax.legend(LegendLocation::Best);
    ax.text(
        Annotation::new(data::AGE_GROUP_FOOTNOTE, 0.5, -0.15)
            .italic()
            .align(HAlign::Center, VAlign::Bottom),
    );
}

/// Reaction-rate bars on the left axis, effectiveness line on a twin right axis,
/// with one legend listing left-axis entries before right-axis entries.
pub fn dose_panel(ax: &mut Chart, doses: &[DoseRecord], theme: &Theme) {
    let at = |offset: f64, pick: fn(&DoseRecord) -> f64| -> Vec<(f64, f64)> {
        doses.iter().enumerate().map(|(i, d)| (i as f64 + offset, pick(d))).collect()
    };

    ax.add_series(
        Series::bars(at(-DOSE_BAR_OFFSET, |d| d.local_reaction), DOSE_BAR_WIDTH)
            .with_label("Local Reactions")
            .with_color(LOCAL_SALMON),
    );
    ax.add_series(
        Series::bars(at(DOSE_BAR_OFFSET, |d| d.systemic_reaction), DOSE_BAR_WIDTH)
            .with_label("Systemic Reactions")
            .with_color(SYSTEMIC_SAND),
    );

    let twin = ax.twinx();
    twin.add_series(
        Series::line(at(0.0, |d| d.effectiveness))
            .with_label("Effectiveness")
            .with_color(DOSE_TEAL)
            .with_marker(Marker::Diamond)
            .with_line_width(LINE_WIDTH),
    );
    twin.set_ylabel("Effectiveness Against Infection (%)", Some(DOSE_TEAL));
    twin.set_ylim(0.0, 100.0);
    let twin_entries = twin.legend_entries(theme);

    ax.set_title("Side Effects vs. Effectiveness per Dose", TITLE_SIZE, true);
    ax.set_xticklabels(doses.iter().map(|d| d.label));
    ax.set_ylabel("Reaction Frequency (%)");
    ax.set_ylim(0.0, 100.0);

    let mut entries = ax.legend_entries(theme);
    entries.extend(twin_entries);
    ax.set_legend(Legend::with_entries(LegendLocation::UpperLeft, entries).with_font_size(9.0));
}

/// Axes-free panel holding the key findings in a translucent rounded box.
pub fn info_panel(ax: &mut Chart, findings: &str) {
    ax.axis_off();
    ax.text(
        Annotation::new(findings, 0.1, 0.5)
            .size(14.0)
            .weight(FontWeight::Medium)
            .align(HAlign::Left, VAlign::Center)
            .with_box(TextBox::rounded(Color::WHITE, 0.5, 1.0)),
    );
}
