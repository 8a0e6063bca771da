//! Static product catalog: (discipline, parameter category, parameter
//! number) to unit / abbreviation / display name, per the WMO and NCEP
//! code tables. A missing entry is never an error; the header simply
//! falls back to "unknown".

pub(crate) struct ProductInfo {
    pub(crate) unit: &'static str,
    pub(crate) abbrev: &'static str,
    pub(crate) name: &'static str,
}

macro_rules! product {
    ($unit:expr, $abbrev:expr, $name:expr) => {
        ProductInfo { unit: $unit, abbrev: $abbrev, name: $name }
    };
}

#[rustfmt::skip]
const PRODUCTS: &[(u8, u8, u8, ProductInfo)] = &[
    // Discipline 0 - Meteorology
    //     Category 0 - Temperature
    (0, 0, 0,    product!("K", "TMP", "Temperature")),
    (0, 0, 6,    product!("K", "DPT", "Dew Point Temperature")),
    (0, 0, 12,   product!("K", "HEATX", "Heat Index")),
    (0, 0, 13,   product!("K", "WCF", "Wind Chill Factor")),
    //     Category 1 - Moisture
    (0, 1, 1,    product!("%", "RH", "Relative Humidity")),
    (0, 1, 3,    product!("kg m-2", "PWAT", "Precipitable Water")),
    (0, 1, 7,    product!("kg m-2 s-1", "PRATE", "Precipitation Rate")),
    (0, 1, 19,   product!("*", "PTYPE", "Precipitation Type")),
    (0, 1, 51,   product!("kg/m-2", "TCWAT", "Total Column Water")),
    (0, 1, 52,   product!("kg/m-2", "TPRATE", "Total Precipitation Rate")),
    (0, 1, 78,   product!("kg/m-2", "TCOLWA", "Total Column Integrated Water")),
    //     Category 2 - Momentum
    (0, 2, 2,    product!("m/s", "UGRD", "U-Component of Wind")),
    (0, 2, 3,    product!("m/s", "VGRD", "V-Component of Wind")),
    //     Category 3 - Mass
    (0, 3, 1,    product!("Pa", "PRMSL", "Pressure Reduced to MSL")),
    //     Category 4 - Shortwave Radiation (UV, Vis)
    (0, 4, 10,   product!("W/m-2", "PHOTAR", "Photosynthetically Active Radiation")),
    (0, 4, 51,   product!("", "UVI", "UV Index")),
    //     Category 6 - Cloud
    (0, 6, 1,    product!("%", "TCDC", "Total Cloud Cover")),
    (0, 6, 3,    product!("%", "LCDC", "Low Cloud Cover")),
    (0, 6, 4,    product!("%", "MCDC", "Medium Cloud Cover")),
    (0, 6, 5,    product!("%", "HCDC", "High Cloud Cover")),
    //     Category 7 - Thermodynamic Stability
    (0, 7, 6,    product!("J/kg", "CAPE", "Convective Available Potential Energy")),
    (0, 7, 21,   product!("", "SSI", "Storm Severity Index")),
    (0, 17, 192, product!("", "LTNG", "Lightning")),
    (0, 19, 0,   product!("m", "VIS", "Visibility")),
    (0, 19, 25,  product!("", "WW", "Weather Interpretation")),
    // Discipline 1 - Hydrology
    (1, 1, 11,   product!("m", "SNOD", "Snow Depth")),
    // Discipline 3 - Satellite Remote Sensing
    (3, 5, 0,    product!("K", "ISSTMP", "Interface Sea Surface Temperture")),
    (3, 5, 1,    product!("K", "SKSSTMP", "Skin Sea Surface Temperature")),
    // Discipline 10 - Oceanographic Products
    //     Category 1 - Currents
    (10, 1, 2,   product!("m/s", "UOGRG", "U-Component of Current")),
    (10, 1, 3,   product!("m/s", "VOGRD", "V-Component of Current")),
];

pub(crate) fn lookup(discipline: u8, category: u8, number: u8) -> Option<&'static ProductInfo> {
    PRODUCTS
        .iter()
        .find(|(d, c, n, _)| (*d, *c, *n) == (discipline, category, number))
        .map(|(_, _, _, info)| info)
}
