//! Text renderers for reports and forecasts. Pure functions of their inputs.

use anyhow::Result;
use clap::ValueEnum;
use tax_core::TaxReport;
use tax_core::calculations::common::format_currency;
use weather_core::{Location, TemperatureCategory, WeatherPresenter, WeatherReading};

pub const TAX_TABLE_TITLE: &str = "Tax Estimates";

const COLD_MARK: &str = "\u{2744}";
const HOT_MARK: &str = "\u{2668}";
const WINDY_MARK: &str = "\u{1F4A8}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Two columns, one row per category: label and `$` amount.
pub fn render_tax_table(report: &TaxReport) -> String {
    let rows: Vec<(&str, String)> = report
        .lines()
        .map(|(category, amount)| (category.label(), format_currency(amount)))
        .collect();
    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let amount_width = rows.iter().map(|(_, a)| a.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(TAX_TABLE_TITLE);
    out.push('\n');
    out.push_str(&"-".repeat(label_width + 2 + amount_width));
    out.push('\n');
    for (label, amount) in rows {
        out.push_str(&format!("{label:<label_width$}  {amount:>amount_width$}\n"));
    }
    out
}

pub fn render_tax_json(report: &TaxReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_report(
    report: &TaxReport,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_tax_table(report)),
        OutputFormat::Json => render_tax_json(report),
    }
}

pub fn render_location(location: &Location) -> String {
    format!(
        "City: {}, {}\nLat/Lng: {}/{}",
        location.place_name, location.region_code, location.latitude, location.longitude
    )
}

pub fn render_weather(
    reading: &WeatherReading,
    presenter: &WeatherPresenter,
) -> String {
    let temperature = presenter.classify_temperature(reading.temperature_c);
    let wind = presenter.classify_wind(reading.wind_speed_mph, reading.wind_direction_deg);

    let mut temp_line = format!("Temp: {}\u{b0}", temperature.fahrenheit);
    match temperature.category {
        TemperatureCategory::Cold => temp_line.push_str(&format!(" {COLD_MARK}")),
        TemperatureCategory::Hot => temp_line.push_str(&format!(" {HOT_MARK}")),
        TemperatureCategory::Normal => {}
    }

    let mut wind_line = format!("Wind: {} mph {}", wind.speed_mph.normalize(), wind.compass);
    if wind.is_windy {
        wind_line.push_str(&format!(" {WINDY_MARK}"));
    }

    format!("{temp_line}\n{wind_line}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::calculations::build_tax_report;

    use super::*;

    #[test]
    fn tax_table_lists_categories_in_order_with_dollars() {
        let report = build_tax_report(dec!(50000)).unwrap();

        let table = render_tax_table(&report);

        assert_eq!(
            table,
            "\
Tax Estimates
------------------------------
Gross Income         $50000.00
Federal Tax           $6790.00
State Tax             $2614.47
Medicare Tax           $725.00
Social Security Tax   $3100.00
Total Tax            $13229.47
Net Income           $36770.53
"
        );
    }

    #[test]
    fn tax_json_uses_two_decimal_strings() {
        let report = build_tax_report(dec!(50000)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render_tax_json(&report).unwrap()).unwrap();

        assert_eq!(json["total_tax"], "13229.47");
        assert_eq!(json["gross_income"], "50000.00");
    }

    #[test]
    fn location_block() {
        let location = Location {
            place_name: "Madison".to_string(),
            region_code: "WI".to_string(),
            latitude: dec!(43.0775),
            longitude: dec!(-89.384),
        };

        assert_eq!(render_location(&location), "City: Madison, WI\nLat/Lng: 43.0775/-89.384");
    }

    #[test]
    fn weather_block_marks_cold_and_windy() {
        let reading = WeatherReading {
            temperature_c: dec!(1),
            wind_speed_mph: dec!(20),
            wind_direction_deg: dec!(360),
        };

        let text = render_weather(&reading, &WeatherPresenter::default());

        assert_eq!(text, "Temp: 34\u{b0} \u{2744}\nWind: 20 mph N \u{1F4A8}");
    }

    #[test]
    fn weather_block_marks_hot_and_calm() {
        let reading = WeatherReading {
            temperature_c: dec!(30),
            wind_speed_mph: dec!(5),
            wind_direction_deg: dec!(180),
        };

        let text = render_weather(&reading, &WeatherPresenter::default());

        assert_eq!(text, "Temp: 86\u{b0} \u{2668}\nWind: 5 mph S");
    }

    #[test]
    fn weather_block_normal_has_no_marks() {
        let reading = WeatherReading {
            temperature_c: dec!(20),
            wind_speed_mph: dec!(9),
            wind_direction_deg: dec!(250),
        };

        let text = render_weather(&reading, &WeatherPresenter::default());

        assert_eq!(text, "Temp: 68\u{b0}\nWind: 9 mph WSW");
    }
}
