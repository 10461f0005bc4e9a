//! Built-in reference attenuation data.
//!
//! Mass-attenuation coefficients $\mu/\rho$ (cm²/g) versus photon energy
//! (MeV) from the NIST X-ray Mass Attenuation Coefficients tables
//! (J. H. Hubbell and S. M. Seltzer, NISTIR 5632). Absorption edges appear
//! as a repeated energy: the first row is the value just below the edge, the
//! second the value just above it.
//!
//! ## Available materials
//!
//! | Symbol | Constructor | Density (g/cm³) | Range (MeV) |
//! |--------|-------------|-----------------|-------------|
//! | `Pb` | [`lead()`] | 11.34 | 0.001–10 |
//! | `Fe` | [`iron()`] | 7.874 | 0.01–10 |
//! | `Al` | [`aluminium()`] | 2.699 | 0.01–10 |
//! | `H2O` | [`water()`] | 1.0 | 0.01–10 |
//! | `Concrete` | [`concrete()`] | 2.3 | 0.01–10 |

use crate::material::{Material, MaterialError};

/// Lead, with M, L and K absorption edges.
pub fn lead() -> Result<Material, MaterialError> {
    // (E/MeV, mu/rho in cm²/g)
    let data: &[(f64, f64)] = &[
        (0.001, 5209.0),
        (0.0015, 2356.0),
        (0.002, 1285.0),
        (0.002484, 800.9),
        (0.002484, 1396.0), // M5
        (0.00253, 1647.0),
        (0.002586, 1944.0),
        (0.002586, 2450.0), // M4
        (0.003, 1965.0),
        (0.003066, 1857.0),
        (0.003066, 2146.0), // M3
        (0.003301, 1792.0),
        (0.003554, 1496.0),
        (0.003554, 1585.0), // M2
        (0.003699, 1441.0),
        (0.003851, 1302.0),
        (0.003851, 1368.0), // M1
        (0.004, 1251.0),
        (0.005, 730.5),
        (0.006, 467.2),
        (0.008, 228.7),
        (0.01, 130.6),
        (0.01304, 67.0),
        (0.01304, 162.1), // L3
        (0.015, 111.6),
        (0.0152, 107.8),
        (0.0152, 148.5), // L2
        (0.01553, 141.2),
        (0.01586, 134.4),
        (0.01586, 154.8), // L1
        (0.02, 86.37),
        (0.03, 30.32),
        (0.04, 14.36),
        (0.05, 8.056),
        (0.06, 5.020),
        (0.08, 2.419),
        (0.088, 1.910),
        (0.088, 7.684), // K
        (0.1, 5.549),
        (0.15, 2.015),
        (0.2, 0.9985),
        (0.3, 0.4032),
        (0.4, 0.2323),
        (0.5, 0.1613),
        (0.6, 0.1250),
        (0.8, 0.08870),
        (1.0, 0.07102),
        (1.022, 0.06962),
        (1.25, 0.05875),
        (1.5, 0.05222),
        (2.0, 0.04607),
        (2.044, 0.04577),
        (3.0, 0.04234),
        (4.0, 0.04200),
        (5.0, 0.04272),
        (6.0, 0.04391),
        (7.0, 0.04528),
        (8.0, 0.04675),
        (9.0, 0.04823),
        (10.0, 0.04972),
    ];
    from_rows("Pb", "Lead", 11.34, data)
}

/// Iron. The K edge (7.1 keV) lies below the tabulated range.
pub fn iron() -> Result<Material, MaterialError> {
    let data: &[(f64, f64)] = &[
        (0.01, 170.6),
        (0.015, 57.08),
        (0.02, 25.68),
        (0.03, 8.176),
        (0.04, 3.629),
        (0.05, 1.958),
        (0.06, 1.205),
        (0.08, 0.5952),
        (0.1, 0.3717),
        (0.15, 0.1964),
        (0.2, 0.1460),
        (0.3, 0.1099),
        (0.4, 0.09400),
        (0.5, 0.08414),
        (0.6, 0.07704),
        (0.8, 0.06699),
        (1.0, 0.05995),
        (1.25, 0.05350),
        (1.5, 0.04883),
        (2.0, 0.04265),
        (3.0, 0.03621),
        (4.0, 0.03312),
        (5.0, 0.03146),
        (6.0, 0.03057),
        (8.0, 0.02991),
        (10.0, 0.02994),
    ];
    from_rows("Fe", "Iron", 7.874, data)
}

pub fn aluminium() -> Result<Material, MaterialError> {
    let data: &[(f64, f64)] = &[
        (0.01, 26.23),
        (0.015, 7.955),
        (0.02, 3.441),
        (0.03, 1.128),
        (0.04, 0.5685),
        (0.05, 0.3681),
        (0.06, 0.2778),
        (0.08, 0.2018),
        (0.1, 0.1704),
        (0.15, 0.1378),
        (0.2, 0.1223),
        (0.3, 0.1042),
        (0.4, 0.09276),
        (0.5, 0.08445),
        (0.6, 0.07802),
        (0.8, 0.06841),
        (1.0, 0.06146),
        (1.25, 0.05496),
        (1.5, 0.05006),
        (2.0, 0.04324),
        (3.0, 0.03541),
        (4.0, 0.03106),
        (5.0, 0.02836),
        (6.0, 0.02655),
        (8.0, 0.02437),
        (10.0, 0.02318),
    ];
    from_rows("Al", "Aluminium", 2.699, data)
}

/// Liquid water.
pub fn water() -> Result<Material, MaterialError> {
    let data: &[(f64, f64)] = &[
        (0.01, 5.329),
        (0.015, 1.673),
        (0.02, 0.8096),
        (0.03, 0.3756),
        (0.04, 0.2683),
        (0.05, 0.2269),
        (0.06, 0.2059),
        (0.08, 0.1837),
        (0.1, 0.1707),
        (0.15, 0.1505),
        (0.2, 0.1370),
        (0.3, 0.1186),
        (0.4, 0.1061),
        (0.5, 0.09687),
        (0.6, 0.08956),
        (0.8, 0.07865),
        (1.0, 0.07072),
        (1.25, 0.06323),
        (1.5, 0.05754),
        (2.0, 0.04942),
        (3.0, 0.03969),
        (4.0, 0.03403),
        (5.0, 0.03031),
        (6.0, 0.02770),
        (8.0, 0.02429),
        (10.0, 0.02219),
    ];
    from_rows("H2O", "Water", 1.0, data)
}

/// Ordinary (NIST) concrete.
pub fn concrete() -> Result<Material, MaterialError> {
    let data: &[(f64, f64)] = &[
        (0.01, 26.27),
        (0.015, 8.161),
        (0.02, 3.604),
        (0.03, 1.202),
        (0.04, 0.6070),
        (0.05, 0.3918),
        (0.06, 0.2943),
        (0.08, 0.2119),
        (0.1, 0.1781),
        (0.15, 0.1433),
        (0.2, 0.1270),
        (0.3, 0.1082),
        (0.4, 0.09629),
        (0.5, 0.08767),
        (0.6, 0.08098),
        (0.8, 0.07103),
        (1.0, 0.06381),
        (1.25, 0.05709),
        (1.5, 0.05197),
        (2.0, 0.04482),
        (3.0, 0.03654),
        (4.0, 0.03189),
        (5.0, 0.02895),
        (6.0, 0.02696),
        (8.0, 0.02450),
        (10.0, 0.02311),
    ];
    from_rows("Concrete", "Ordinary concrete", 2.3, data)
}

fn from_rows(
    symbol: &str,
    name: &str,
    density: f64,
    rows: &[(f64, f64)],
) -> Result<Material, MaterialError> {
    let energies: Vec<f64> = rows.iter().map(|&(e, _)| e).collect();
    let coefficients: Vec<f64> = rows.iter().map(|&(_, m)| m).collect();
    Material::new(symbol, name, density, energies, coefficients)
}
