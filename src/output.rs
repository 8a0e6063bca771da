use chrono::{TimeZone, Utc};
use serde::Serialize;

use crate::grib;
use crate::grib::sections::sect1::Identification;

/// The externally visible record, one per GRIB2 message: the fixed-shape
/// header plus the unpacked sample values (`null` for masked points).
#[derive(Debug, Serialize)]
pub struct Message {
    pub header: Header,
    pub data: Vec<Option<f64>>,
}

/// A header slot holds either a decoded number, a decoded string, or the
/// literal "unknown" when the section carrying it was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Int(i64),
    Float(f64),
    Text(String),
}

macro_rules! int_value_impl {
    ($($ty:ty),*) => ($(
        impl From<$ty> for HeaderValue {
            fn from(v: $ty) -> Self {
                HeaderValue::Int(v as i64)
            }
        }
    )*);
}

int_value_impl! { u8, u16, u32, i64 }

impl From<f64> for HeaderValue {
    fn from(v: f64) -> Self {
        HeaderValue::Float(v)
    }
}

impl From<&str> for HeaderValue {
    fn from(v: &str) -> Self {
        HeaderValue::Text(v.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(v: String) -> Self {
        HeaderValue::Text(v)
    }
}

fn or_unknown<T: Into<HeaderValue>>(value: Option<T>) -> HeaderValue {
    value
        .map(Into::into)
        .unwrap_or_else(|| HeaderValue::Text(String::from("unknown")))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: HeaderValue,
    pub parameter_name: HeaderValue,
    pub discipline: HeaderValue,
    pub grib_edition: HeaderValue,
    pub center: HeaderValue,
    pub subcenter: HeaderValue,
    pub ref_time: HeaderValue,
    #[serde(rename = "significanceOfRT")]
    pub significance_of_rt: HeaderValue,
    pub product_status: HeaderValue,
    pub product_type: HeaderValue,
    pub product_definition_template: HeaderValue,
    pub parameter_category: HeaderValue,
    pub parameter_number: HeaderValue,
    pub parameter_unit: HeaderValue,
    pub gen_process_type: HeaderValue,
    pub forecast_time: HeaderValue,
    pub surface1_type: HeaderValue,
    pub surface1_value: HeaderValue,
    pub surface2_type: HeaderValue,
    pub surface2_value: HeaderValue,
    pub grid_definition_template: HeaderValue,
    pub number_points: HeaderValue,
    pub grid_units: HeaderValue,
    pub resolution: HeaderValue,
    pub winds: HeaderValue,
    pub scan_mode: HeaderValue,
    pub nx: HeaderValue,
    pub ny: HeaderValue,
    pub basic_angle: HeaderValue,
    pub lo1: HeaderValue,
    pub la1: HeaderValue,
    pub lo2: HeaderValue,
    pub la2: HeaderValue,
    pub dx: HeaderValue,
    pub dy: HeaderValue,
}

pub(crate) fn render(message: &grib::Message) -> grib::Result<Message> {
    let data = message.decode_values()?;

    Ok(Message {
        header: build_header(message),
        data,
    })
}

fn build_header(msg: &grib::Message) -> Header {
    let ident = msg.identification.as_ref();
    let product = msg.product_definition.as_ref();
    let info = product.and_then(|p| p.info);
    let grid = msg.grid_definition.as_ref();

    Header {
        name: or_unknown(info.map(|i| i.name)),
        parameter_name: or_unknown(info.map(|i| i.abbrev)),
        discipline: msg.indicator.discipline.into(),
        grib_edition: msg.indicator.edition.into(),
        center: or_unknown(ident.map(|i| i.centre_id)),
        subcenter: or_unknown(ident.map(|i| i.subcentre_id)),
        ref_time: or_unknown(ident.map(build_ref_time)),
        significance_of_rt: or_unknown(ident.map(|i| i.ref_time_significance)),
        product_status: or_unknown(ident.map(|i| i.prod_status)),
        product_type: or_unknown(ident.map(|i| i.data_type)),
        product_definition_template: or_unknown(product.map(|p| p.template_number)),
        parameter_category: or_unknown(product.map(|p| p.product.parameter_category)),
        parameter_number: or_unknown(product.map(|p| p.product.parameter_number)),
        parameter_unit: or_unknown(info.map(|i| i.unit)),
        gen_process_type: or_unknown(product.map(|p| p.product.gen_process_type)),
        forecast_time: or_unknown(product.map(|p| p.product.forecast_time)),
        surface1_type: or_unknown(product.map(|p| p.product.first_surface.surface_type)),
        surface1_value: or_unknown(product.map(|p| p.product.first_surface.scaled_value)),
        surface2_type: or_unknown(product.map(|p| p.product.second_surface.surface_type)),
        surface2_value: or_unknown(product.map(|p| p.product.second_surface.scaled_value)),
        grid_definition_template: or_unknown(grid.map(|g| g.template_number)),
        number_points: or_unknown(grid.map(|g| g.num_points as i64)),
        grid_units: "degrees".into(),
        resolution: or_unknown(grid.map(|g| g.grid.resolution)),
        winds: or_unknown(grid.map(|g| g.grid.winds)),
        scan_mode: or_unknown(grid.map(|g| g.grid.scan_mode)),
        nx: or_unknown(grid.map(|g| g.grid.nx)),
        ny: or_unknown(grid.map(|g| g.grid.ny)),
        basic_angle: or_unknown(grid.map(|g| g.grid.basic_angle)),
        lo1: or_unknown(grid.map(|g| g.grid.lo1)),
        la1: or_unknown(grid.map(|g| g.grid.la1)),
        lo2: or_unknown(grid.map(|g| g.grid.lo2)),
        la2: or_unknown(grid.map(|g| g.grid.la2)),
        dx: or_unknown(grid.map(|g| g.grid.dx)),
        dy: or_unknown(grid.map(|g| g.grid.dy)),
    }
}

/// ISO-8601 UTC reference time. The month field is zero-based (0 is
/// January); date parts that form no valid instant fall back to the
/// literal "Unknown".
fn build_ref_time(ident: &Identification) -> HeaderValue {
    match Utc
        .with_ymd_and_hms(
            ident.year as i32,
            ident.month as u32 + 1,
            ident.day as u32,
            ident.hour as u32,
            ident.minute as u32,
            ident.second as u32,
        )
        .single()
    {
        Some(t) => HeaderValue::Text(t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
        None => {
            warn!(
                "Invalid reference time {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                ident.year, ident.month, ident.day, ident.hour, ident.minute, ident.second
            );
            HeaderValue::Text(String::from("Unknown"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grib::testdata::SynthMessage;

    fn identification() -> Identification {
        Identification {
            centre_id: 7,
            subcentre_id: 0,
            master_table_version: 2,
            local_table_version: 1,
            ref_time_significance: 1,
            year: 2024,
            month: 0,
            day: 15,
            hour: 12,
            minute: 0,
            second: 0,
            prod_status: 0,
            data_type: 1,
        }
    }

    #[test]
    fn ref_time_is_iso8601_with_zero_based_month() {
        assert_eq!(
            build_ref_time(&identification()),
            HeaderValue::Text(String::from("2024-01-15T12:00:00.000Z"))
        );
    }

    #[test]
    fn invalid_date_parts_fall_back_to_unknown() {
        let mut ident = identification();
        ident.day = 99;
        assert_eq!(
            build_ref_time(&ident),
            HeaderValue::Text(String::from("Unknown"))
        );
    }

    #[test]
    fn absent_sections_default_to_unknown() {
        let message = bare_message();
        let rendered = render(&message).unwrap();

        let unknown = HeaderValue::Text(String::from("unknown"));
        assert_eq!(rendered.header.center, unknown);
        assert_eq!(rendered.header.name, unknown);
        assert_eq!(rendered.header.nx, unknown);
        assert_eq!(rendered.header.discipline, HeaderValue::Int(0));
        assert_eq!(rendered.header.grid_units, HeaderValue::Text(String::from("degrees")));
        assert!(rendered.data.is_empty());
    }

    fn bare_message() -> crate::grib::Message {
        let buf = SynthMessage::default().build();
        let mut message = crate::grib::from_slice(&buf).unwrap().remove(0);
        message.identification = None;
        message.product_definition = None;
        message.grid_definition = None;
        message.data = None;
        message
    }

    #[test]
    fn catalog_miss_yields_unknown_name_triple() {
        let buf = SynthMessage {
            discipline: 9,
            category: 9,
            number: 9,
            ..Default::default()
        }
        .build();
        let message = crate::grib::from_slice(&buf).unwrap().remove(0);
        let header = build_header(&message);

        let unknown = HeaderValue::Text(String::from("unknown"));
        assert_eq!(header.parameter_unit, unknown);
        assert_eq!(header.parameter_name, unknown);
        assert_eq!(header.name, unknown);
        // the numeric keys still come straight from the sections
        assert_eq!(header.parameter_category, HeaderValue::Int(9));
    }

    #[test]
    fn header_serializes_with_reference_field_names() {
        let buf = SynthMessage::default().build();
        let message = crate::grib::from_slice(&buf).unwrap().remove(0);
        let value = serde_json::to_value(build_header(&message)).unwrap();

        assert_eq!(value["parameterName"], "UGRD");
        assert_eq!(value["name"], "U-Component of Wind");
        assert_eq!(value["parameterUnit"], "m/s");
        assert_eq!(value["significanceOfRT"], 1);
        assert_eq!(value["refTime"], "2024-01-15T12:00:00.000Z");
        assert_eq!(value["gridDefinitionTemplate"], 0);
        assert_eq!(value["numberPoints"], 2);
        assert_eq!(value["winds"], "true");
        assert_eq!(value["la1"], 90.0);
        assert_eq!(value["la2"], -90.0);
        assert_eq!(value["lo2"], 359.0);
        assert_eq!(value["surface1Type"], 103);
        assert_eq!(value["surface1Value"], 10);
        assert_eq!(value["gridUnits"], "degrees");
    }
}
