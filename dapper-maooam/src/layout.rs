//! Indexing of the 36 spectral coefficients

use std::ops::Range;

/// Number of variables in the state vector
pub const N_VARIABLES: usize = 36;

const N_ATMOSPHERIC_MODES: usize = 10;
const N_OCEANIC_MODES: usize = 8;

/// Physical field a coefficient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Atmospheric barotropic streamfunction ψ_a
    AtmosphereStreamfunction,
    /// Atmospheric temperature θ_a
    AtmosphereTemperature,
    /// Oceanic streamfunction ψ_o
    OceanStreamfunction,
    /// Oceanic temperature θ_o
    OceanTemperature,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::AtmosphereStreamfunction,
        Component::AtmosphereTemperature,
        Component::OceanStreamfunction,
        Component::OceanTemperature,
    ];

    /// Index range of this component in the state vector
    pub fn range(self) -> Range<usize> {
        match self {
            Component::AtmosphereStreamfunction => 0..10,
            Component::AtmosphereTemperature => 10..20,
            Component::OceanStreamfunction => 20..28,
            Component::OceanTemperature => 28..36,
        }
    }

    pub fn is_atmospheric(self) -> bool {
        matches!(
            self,
            Component::AtmosphereStreamfunction | Component::AtmosphereTemperature
        )
    }
}

/// Type of an atmospheric basis function (channel geometry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeType {
    /// Zonally uniform, `sqrt(2) cos(P y)`
    A,
    /// `2 cos(M n x) sin(P y)`
    K,
    /// `2 sin(M n x) sin(P y)`
    L,
}

/// Atmospheric mode with integer wavenumbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtmosphericMode {
    pub kind: ModeType,
    pub nx: u32,
    pub ny: u32,
}

/// Oceanic mode; the zonal wavenumber is a half-integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanicMode {
    pub nx: f64,
    pub ny: u32,
}

/// Descriptor of one state variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Atmospheric(Component, AtmosphericMode),
    Oceanic(Component, OceanicMode),
}

const ATMOSPHERIC_MODES: [AtmosphericMode; N_ATMOSPHERIC_MODES] = [
    AtmosphericMode { kind: ModeType::A, nx: 0, ny: 1 },
    AtmosphericMode { kind: ModeType::K, nx: 1, ny: 1 },
    AtmosphericMode { kind: ModeType::L, nx: 1, ny: 1 },
    AtmosphericMode { kind: ModeType::A, nx: 0, ny: 2 },
    AtmosphericMode { kind: ModeType::K, nx: 1, ny: 2 },
    AtmosphericMode { kind: ModeType::L, nx: 1, ny: 2 },
    AtmosphericMode { kind: ModeType::K, nx: 2, ny: 1 },
    AtmosphericMode { kind: ModeType::L, nx: 2, ny: 1 },
    AtmosphericMode { kind: ModeType::K, nx: 2, ny: 2 },
    AtmosphericMode { kind: ModeType::L, nx: 2, ny: 2 },
];

fn oceanic_mode(i: usize) -> OceanicMode {
    OceanicMode {
        nx: if i < 4 { 0.5 } else { 1.0 },
        ny: (i % 4) as u32 + 1,
    }
}

/// Component holding state variable `index`
pub fn component_of(index: usize) -> Option<Component> {
    Component::ALL
        .into_iter()
        .find(|component| component.range().contains(&index))
}

/// Mode descriptor of state variable `index`
pub fn mode(index: usize) -> Option<Mode> {
    let component = component_of(index)?;
    let offset = index - component.range().start;
    Some(if component.is_atmospheric() {
        Mode::Atmospheric(component, ATMOSPHERIC_MODES[offset])
    } else {
        debug_assert!(offset < N_OCEANIC_MODES);
        Mode::Oceanic(component, oceanic_mode(offset))
    })
}
