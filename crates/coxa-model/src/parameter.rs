//! Static definitions for the bilateral hip radiographic parameters.
//!
//! Every measurement in this domain is recorded once per body side. The
//! full parameter set is a closed enum so that "every parameter present"
//! is a property of the type system rather than a runtime convention.
//!
//! Reference ranges follow the measurement conventions used on a standard
//! AP pelvis radiograph (Murphy femoral torsion, bimalleolar tibial
//! torsion, Wiberg LCE angle).

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Number of clinical parameters in the panel.
pub const PARAMETER_COUNT: usize = 14;

/// Body side of a bilateral measurement.
///
/// The domain records every parameter for both sides; ordering is always
/// right before left, matching the reading order of the report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Both sides in report order.
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];

    /// Returns the canonical lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }

    /// Returns the German column label used in the report table.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Right => "Rechts",
            Side::Left => "Links",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value kind of a clinical parameter.
///
/// Flag parameters are yes/no radiographic signs; the numeric kinds carry
/// a unit glyph and may declare a reference range. `Text` is free-form
/// (the leg-length field, which clinicians fill with provisional notes as
/// often as with numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Yes/no radiographic sign or imaging modality checkbox.
    Flag,
    /// Angle in degrees.
    Angle,
    /// Percentage.
    Percent,
    /// Length in millimeters.
    Length,
    /// Free-form text.
    Text,
}

impl ParameterKind {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Flag => "flag",
            ParameterKind::Angle => "angle",
            ParameterKind::Percent => "percent",
            ParameterKind::Length => "length",
            ParameterKind::Text => "text",
        }
    }

    /// Unit glyph appended to non-empty display cells, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            ParameterKind::Angle => Some("°"),
            ParameterKind::Percent => Some("%"),
            ParameterKind::Length => Some("mm"),
            ParameterKind::Flag | ParameterKind::Text => None,
        }
    }

    /// Returns true for kinds whose values are parsed as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ParameterKind::Angle | ParameterKind::Percent | ParameterKind::Length
        )
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric interval considered clinically normal for a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    /// Inclusive lower bound.
    pub low: f64,
    /// Inclusive upper bound.
    pub high: f64,
}

impl ReferenceRange {
    /// Returns true if the value lies within `[low, high]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Presentation grouping of the parameter panel.
///
/// Mirrors the sections of the clinical entry form; only used for
/// grouping listings, never for classification or export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterGroup {
    Imaging,
    Torsion,
    LegLength,
    Angular,
    Retroversion,
}

impl ParameterGroup {
    /// All groups in form order.
    pub const ALL: [ParameterGroup; 5] = [
        ParameterGroup::Imaging,
        ParameterGroup::Torsion,
        ParameterGroup::LegLength,
        ParameterGroup::Angular,
        ParameterGroup::Retroversion,
    ];

    /// Returns the section heading.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterGroup::Imaging => "Imaging Modalities",
            ParameterGroup::Torsion => "Torsion Measurements",
            ParameterGroup::LegLength => "Leg Length",
            ParameterGroup::Angular => "Angular Measurements",
            ParameterGroup::Retroversion => "Retroversion Indicators",
        }
    }
}

impl fmt::Display for ParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One clinical measurement of the hip panel.
///
/// Declaration order is the fixed export order of the report table and
/// must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    Mri,
    FemoralTorsion,
    TibialTorsion,
    XrayEos,
    LegLength,
    Ccd,
    /// Alpha angle. The declared range is `{0, 60}` although the display
    /// label only states the upper bound (`<60°`); negative values
    /// therefore classify as low. Kept as declared pending clinical
    /// review.
    Alpha,
    Lce,
    AcetabularIndex,
    CrossingSign,
    IschialSpineSign,
    PosteriorWallSign,
    RetroversionIndex,
    CrossoverSign,
}

impl Parameter {
    /// All parameters in the fixed export order.
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Parameter::Mri,
        Parameter::FemoralTorsion,
        Parameter::TibialTorsion,
        Parameter::XrayEos,
        Parameter::LegLength,
        Parameter::Ccd,
        Parameter::Alpha,
        Parameter::Lce,
        Parameter::AcetabularIndex,
        Parameter::CrossingSign,
        Parameter::IschialSpineSign,
        Parameter::PosteriorWallSign,
        Parameter::RetroversionIndex,
        Parameter::CrossoverSign,
    ];

    /// Returns the canonical identifier used in record JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Mri => "mri",
            Parameter::FemoralTorsion => "femoral_torsion",
            Parameter::TibialTorsion => "tibial_torsion",
            Parameter::XrayEos => "xray_eos",
            Parameter::LegLength => "leg_length",
            Parameter::Ccd => "ccd",
            Parameter::Alpha => "alpha",
            Parameter::Lce => "lce",
            Parameter::AcetabularIndex => "acetabular_index",
            Parameter::CrossingSign => "crossing_sign",
            Parameter::IschialSpineSign => "ischial_spine_sign",
            Parameter::PosteriorWallSign => "posterior_wall_sign",
            Parameter::RetroversionIndex => "retroversion_index",
            Parameter::CrossoverSign => "crossover_sign",
        }
    }

    /// Returns the German display label used in the report table.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Mri => "MRI",
            Parameter::FemoralTorsion => "Femorale Torsion (nach Murphy)",
            Parameter::TibialTorsion => "Tibiale Torsion (Bimalleolare Methode)",
            Parameter::XrayEos => "Röntgen/EOS",
            Parameter::LegLength => "Beinlänge",
            Parameter::Ccd => "CCD-Winkel",
            Parameter::Alpha => "Alpha-Winkel",
            Parameter::Lce => "LCE-Winkel",
            Parameter::AcetabularIndex => "Azetabulärer Index",
            Parameter::CrossingSign => "Crossing Sign",
            Parameter::IschialSpineSign => "Ischial Spine Sign",
            Parameter::PosteriorWallSign => "Posterior Wall Sign",
            Parameter::RetroversionIndex => "Retroversion-Index",
            Parameter::CrossoverSign => "Cross-over sign (figure of 8)",
        }
    }

    /// Returns the value kind.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Parameter::Mri
            | Parameter::XrayEos
            | Parameter::CrossingSign
            | Parameter::IschialSpineSign
            | Parameter::PosteriorWallSign
            | Parameter::CrossoverSign => ParameterKind::Flag,
            Parameter::FemoralTorsion
            | Parameter::TibialTorsion
            | Parameter::Ccd
            | Parameter::Alpha
            | Parameter::Lce
            | Parameter::AcetabularIndex => ParameterKind::Angle,
            Parameter::RetroversionIndex => ParameterKind::Percent,
            Parameter::LegLength => ParameterKind::Text,
        }
    }

    /// Returns the declared reference range, if any.
    ///
    /// Flag parameters and free-form fields have none; their norm is
    /// either the boolean convention (negative is normal) or undefined.
    pub fn reference_range(&self) -> Option<ReferenceRange> {
        let (low, high) = match self {
            Parameter::FemoralTorsion => (10.0, 25.0),
            Parameter::TibialTorsion => (15.0, 30.0),
            Parameter::Ccd => (120.0, 135.0),
            Parameter::Alpha => (0.0, 60.0),
            Parameter::Lce => (23.0, 33.0),
            Parameter::AcetabularIndex => (3.0, 13.0),
            Parameter::RetroversionIndex => (0.0, 0.0),
            _ => return None,
        };
        Some(ReferenceRange { low, high })
    }

    /// Human-readable normal-range label shown next to entry fields.
    pub fn range_label(&self) -> Option<&'static str> {
        match self {
            Parameter::FemoralTorsion => Some("10-25°"),
            Parameter::TibialTorsion => Some("15-30°"),
            Parameter::Ccd => Some("120-135°"),
            Parameter::Alpha => Some("<60°"),
            Parameter::Lce => Some("23-33°"),
            Parameter::AcetabularIndex => Some("3-13°"),
            Parameter::RetroversionIndex => Some("0%"),
            Parameter::CrossingSign
            | Parameter::IschialSpineSign
            | Parameter::PosteriorWallSign
            | Parameter::CrossoverSign => Some("Negative"),
            Parameter::Mri | Parameter::XrayEos | Parameter::LegLength => None,
        }
    }

    /// Constant content of the `Referenzbereich` column in the exported
    /// table. Uses an en dash and German labels, unlike [`Self::range_label`];
    /// the two label sets differ deliberately and must stay distinct.
    pub fn reference_cell(&self) -> &'static str {
        match self {
            Parameter::FemoralTorsion => "10–25°",
            Parameter::TibialTorsion => "15–30°",
            Parameter::Ccd => "120–135°",
            Parameter::Alpha => "<60°",
            Parameter::Lce => "23–33°",
            Parameter::AcetabularIndex => "3–13°",
            Parameter::RetroversionIndex => "0%",
            Parameter::CrossingSign
            | Parameter::IschialSpineSign
            | Parameter::PosteriorWallSign
            | Parameter::CrossoverSign => "Nein",
            Parameter::Mri | Parameter::XrayEos | Parameter::LegLength => "-",
        }
    }

    /// Clinical description shown in listings and entry-form tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            Parameter::Mri => "For torsion measurements, labrum, cartilage, asphericity",
            Parameter::XrayEos => "Standard AP pelvis, 120cm film-tube distance",
            Parameter::FemoralTorsion => "Femoral Torsion (nach Murphy): Normal range 10-25°",
            Parameter::TibialTorsion => "Tibial Torsion (Bimalleolare Method): Normal range 15-30°",
            Parameter::LegLength => "Leg Length: Measurement in millimeters",
            Parameter::Ccd => {
                "Caput-Collum-Diaphyseal angle: Measures neck-shaft angle. \
                 Normal: 120-135°, <120° = Coxa vara, >135° = Coxa valga"
            }
            Parameter::Alpha => {
                "Alpha angle: Measures femoral head-neck junction. Normal: <60°, Abnormal: >60°"
            }
            Parameter::Lce => {
                "Lateral Center-Edge angle: Measures lateral coverage of femoral head. \
                 Dysplasia: <22°, Normal: 23-33°, Deep hip: 34-39°, Protrusion: >39°"
            }
            Parameter::AcetabularIndex => {
                "Acetabular Index: Measures acetabular roof inclination. \
                 Dysplasia: >14°, Normal: 3-13°, Deep hip: -7-2°, Protrusion: <-8°"
            }
            Parameter::CrossingSign => {
                "Crossing Sign: Indicator of acetabular retroversion. Normal: Negative"
            }
            Parameter::IschialSpineSign => {
                "Ischial Spine Sign: Indicator of acetabular retroversion. Normal: Negative"
            }
            Parameter::PosteriorWallSign => {
                "Posterior Wall Sign: Indicator of acetabular coverage. Normal: Negative"
            }
            Parameter::RetroversionIndex => {
                "Retroversion Index: Percentage of acetabular opening with retroversion. \
                 Normal: 0%"
            }
            Parameter::CrossoverSign => {
                "Cross-over sign (figure of 8): Indicator of acetabular retroversion. \
                 Normal: Negative"
            }
        }
    }

    /// Returns the presentation group of the entry form.
    pub fn group(&self) -> ParameterGroup {
        match self {
            Parameter::Mri | Parameter::XrayEos => ParameterGroup::Imaging,
            Parameter::FemoralTorsion | Parameter::TibialTorsion => ParameterGroup::Torsion,
            Parameter::LegLength => ParameterGroup::LegLength,
            Parameter::Ccd | Parameter::Alpha | Parameter::Lce | Parameter::AcetabularIndex => {
                ParameterGroup::Angular
            }
            Parameter::CrossingSign
            | Parameter::IschialSpineSign
            | Parameter::PosteriorWallSign
            | Parameter::RetroversionIndex
            | Parameter::CrossoverSign => ParameterGroup::Retroversion,
        }
    }

    /// Returns true for yes/no parameters.
    pub fn is_flag(&self) -> bool {
        self.kind() == ParameterKind::Flag
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ModelError;

    /// Parse a parameter identifier (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Parameter::ALL
            .iter()
            .copied()
            .find(|parameter| parameter.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownParameter(s.trim().to_string()))
    }
}
