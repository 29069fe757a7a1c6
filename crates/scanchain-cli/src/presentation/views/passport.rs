use std::fmt;

use owo_colors::OwoColorize;

use super::card_rule;
use crate::presentation::formatters::{date, number};
use crate::presentation::view_models::{
    DateFormat, DisplayOptions, FieldValue, PassportViewModel, SectionViewModel, StatusLevel,
};

pub struct PassportView<'a> {
    pub data: &'a PassportViewModel,
    pub options: &'a DisplayOptions,
}

impl PassportView<'_> {
    fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Date(raw) => self.format_date(raw),
            FieldValue::WeightKg(weight) => number::format_weight_kg(weight),
            FieldValue::WeightMissing => "— kg".to_string(),
            FieldValue::Percent(value) => number::format_percent(value),
            FieldValue::Confidence(fraction) => number::format_confidence(*fraction),
        }
    }

    fn format_date(&self, raw: &str) -> String {
        match self.options.date_format {
            DateFormat::Long => date::format_long_date(raw),
            DateFormat::Raw => raw.to_string(),
        }
    }

    fn status_line(&self) -> String {
        let badge = &self.data.status;
        let pill = format!("● {}", badge.label);
        if !self.options.enable_color {
            return pill;
        }
        match badge.level {
            StatusLevel::Success => pill.green().to_string(),
            StatusLevel::Warning => pill.yellow().to_string(),
            StatusLevel::Error => pill.red().to_string(),
            StatusLevel::Neutral => pill.bright_black().to_string(),
        }
    }

    fn write_section(&self, f: &mut fmt::Formatter, section: &SectionViewModel) -> fmt::Result {
        writeln!(f)?;
        let title = section.title.to_uppercase();
        if self.options.enable_color {
            writeln!(f, "  {}", title.bright_black())?;
        } else {
            writeln!(f, "  {}", title)?;
        }
        for row in &section.rows {
            writeln!(
                f,
                "  {} {:<17} {}",
                row.icon,
                row.label,
                self.format_value(&row.value)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for PassportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = card_rule();
        writeln!(f, "{}", rule)?;
        if self.options.enable_color {
            writeln!(f, "  {}", "Scanchain".bright_green().bold())?;
        } else {
            writeln!(f, "  Scanchain")?;
        }
        writeln!(f, "  Batch Passport")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        if let Some(id) = &self.data.id {
            let id_display = format!("#{}", id);
            if self.options.enable_color {
                writeln!(f, "  {:<10}{}", "Batch ID", id_display.bright_green().bold())?;
            } else {
                writeln!(f, "  {:<10}{}", "Batch ID", id_display)?;
            }
        }
        writeln!(f, "  {:<10}{}", "Status", self.status_line())?;
        if let Some(point) = &self.data.collection_point {
            writeln!(f, "  📍 {}", point)?;
        }
        if let Some(created) = &self.data.created_at {
            writeln!(f, "  {}", self.format_date(created))?;
        }
        if let Some(url) = &self.data.photo_url {
            writeln!(f)?;
            writeln!(f, "  🖼️ {}", url)?;
        }

        for section in &self.data.sections {
            self.write_section(f, section)?;
        }

        writeln!(f)?;
        writeln!(f, "  🔒 Verified by Scanchain")?;
        writeln!(
            f,
            "     This batch passport is cryptographically linked to the original record."
        )?;
        writeln!(f)?;
        writeln!(f, "  Scanchain · Secure Agricultural Batch Tracking")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::passport::present_passport;
    use crate::presentation::view_models::PresentOptions;
    use scanchain_types::BatchRecord;

    fn render(json: &str, options: DisplayOptions) -> String {
        let record: BatchRecord = serde_json::from_str(json).unwrap();
        let vm = present_passport(&record, &PresentOptions::default());
        PassportView {
            data: &vm,
            options: &options,
        }
        .to_string()
    }

    fn plain() -> DisplayOptions {
        DisplayOptions {
            enable_color: false,
            ..DisplayOptions::default()
        }
    }

    #[test]
    fn test_present_fields_appear_exactly_once() {
        let out = render(
            r#"{"id":"A102","status":"Accepted","grossWeight":120,"netWeight":110,
                "confidenceScore":0.873,"farmerName":"J. Otieno"}"#,
            plain(),
        );
        assert_eq!(out.matches("#A102").count(), 1);
        assert_eq!(out.matches("120 kg").count(), 1);
        assert_eq!(out.matches("110 kg").count(), 1);
        assert_eq!(out.matches("87.3%").count(), 1);
        assert_eq!(out.matches("J. Otieno").count(), 1);
        assert!(out.contains("● Accepted"));
        assert!(out.contains("FARMER INFORMATION"));
        assert!(!out.contains("COLLECTION AGENT"));
    }

    #[test]
    fn test_absent_id_row_is_suppressed() {
        let out = render(r#"{"status":"Pending"}"#, plain());
        assert!(!out.contains("Batch ID"));
        assert!(out.contains("● Pending"));
    }

    #[test]
    fn test_dates_follow_the_configured_style() {
        let json = r#"{"id":"A1","createdAt":"2024-01-04T09:30:00Z","arrivalDate":"2024-01-05"}"#;

        let long = render(json, plain());
        assert!(long.contains("January 4, 2024"));
        assert!(long.contains("January 5, 2024"));

        let raw = render(
            json,
            DisplayOptions {
                enable_color: false,
                date_format: DateFormat::Raw,
            },
        );
        assert!(raw.contains("2024-01-04T09:30:00Z"));
        assert!(raw.contains("2024-01-05"));
    }

    #[test]
    fn test_no_line_has_trailing_whitespace() {
        let out = render(
            r#"{"id":"A102","grossWeight":120,"farmerName":"J. Otieno"}"#,
            plain(),
        );
        for line in out.lines() {
            assert_eq!(line, line.trim_end(), "trailing whitespace in {:?}", line);
        }
    }
}
