use crate::models::WaypointRecord;
use crate::utils::constants::KML_CODE_NAME_SEPARATOR;
use crate::utils::coordinates::DecimalPosition;

/// Which waypoint fields become a placemark's label and description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelScheme {
    ByName,
    ByCode,
    ByCodeName,
}

impl LabelScheme {
    pub const ALL: [LabelScheme; 3] = [
        LabelScheme::ByName,
        LabelScheme::ByCode,
        LabelScheme::ByCodeName,
    ];

    pub fn file_suffix(&self) -> &'static str {
        match self {
            LabelScheme::ByName => "name",
            LabelScheme::ByCode => "code",
            LabelScheme::ByCodeName => "code_name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LabelScheme::ByName => "Waypoint Name as Label",
            LabelScheme::ByCode => "Waypoint Code as Label",
            LabelScheme::ByCodeName => "CODE - NAME as Label",
        }
    }

    pub fn label(&self, record: &WaypointRecord) -> String {
        match self {
            LabelScheme::ByName => record.name.clone(),
            LabelScheme::ByCode => record.code.clone(),
            LabelScheme::ByCodeName => {
                format!("{}{}{}", record.code, KML_CODE_NAME_SEPARATOR, record.name)
            }
        }
    }

    pub fn description(&self, record: &WaypointRecord) -> String {
        match self {
            LabelScheme::ByName => format!("Code: {}", record.code),
            LabelScheme::ByCode => format!("Waypoint: {}", record.name),
            LabelScheme::ByCodeName => format!("State: {}", record.state),
        }
    }
}

impl std::fmt::Display for LabelScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Split a `CODE - NAME` label back into code and name
pub fn split_code_name_label(label: &str) -> Option<(&str, &str)> {
    label.split_once(KML_CODE_NAME_SEPARATOR)
}

/// A labelled point ready for KML output
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub label: String,
    pub description: String,
    pub position: DecimalPosition,
}

impl Placemark {
    pub fn from_record(record: &WaypointRecord, position: DecimalPosition, scheme: LabelScheme) -> Self {
        Self {
            label: scheme.label(record),
            description: scheme.description(record),
            position,
        }
    }

    pub fn coordinates(&self) -> String {
        self.position.to_kml_coordinates()
    }
}

/// All placemarks for one label scheme, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct PlacemarkDocument {
    pub scheme: LabelScheme,
    pub placemarks: Vec<Placemark>,
}

impl PlacemarkDocument {
    pub fn new(scheme: LabelScheme) -> Self {
        Self {
            scheme,
            placemarks: Vec::new(),
        }
    }

    pub fn push(&mut self, placemark: Placemark) {
        self.placemarks.push(placemark);
    }

    pub fn len(&self) -> usize {
        self.placemarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placemarks.is_empty()
    }
}
