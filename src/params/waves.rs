//! Wave definitions and the editable set of waves summed into the surface.

use glam::Vec2;

use crate::error::{OceanError, Result};

/// Displacement algorithm applied to every wave in the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveAlgorithm {
    /// Vertical-only displacement: sum of `amplitude * sin(phase)`
    #[default]
    SummationOfSines,

    /// Trochoidal displacement: vertices also move horizontally toward crests
    Gerstner,
}

/// Scalar field of a wave addressable by the per-index setters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveField {
    Amplitude,
    Wavelength,
    Speed,
    Sharpness,
    DirectionX,
    DirectionY,
}

impl WaveField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Amplitude => "amplitude",
            Self::Wavelength => "wavelength",
            Self::Speed => "speed",
            Self::Sharpness => "sharpness",
            Self::DirectionX => "direction.x",
            Self::DirectionY => "direction.y",
        }
    }
}

/// Parameters of a single periodic wave
///
/// Fields are only reachable through validating constructors and setters so a
/// stored wave never carries a zero wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDefinition {
    /// Distance between crests in grid units (never zero)
    wavelength: f32,

    /// Crest height in world units
    amplitude: f32,

    /// Phase velocity in grid units per second
    speed: f32,

    /// Gerstner crest sharpness (horizontal displacement scale)
    sharpness: f32,

    /// Travel direction, normalized only at evaluation time
    direction: Vec2,
}

impl Default for WaveDefinition {
    fn default() -> Self {
        Self {
            wavelength: 1.0,
            amplitude: 1.0,
            speed: 0.0,
            sharpness: 1.0,
            direction: Vec2::ZERO,
        }
    }
}

impl WaveDefinition {
    /// Create a wave, rejecting a zero wavelength or any non-finite value
    pub fn new(
        wavelength: f32,
        amplitude: f32,
        speed: f32,
        sharpness: f32,
        direction: Vec2,
    ) -> Result<Self> {
        let mut wave = Self::default();
        wave.set(WaveField::Wavelength, wavelength)?;
        wave.set(WaveField::Amplitude, amplitude)?;
        wave.set(WaveField::Speed, speed)?;
        wave.set(WaveField::Sharpness, sharpness)?;
        wave.set(WaveField::DirectionX, direction.x)?;
        wave.set(WaveField::DirectionY, direction.y)?;
        Ok(wave)
    }

    pub fn wavelength(&self) -> f32 {
        self.wavelength
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sharpness(&self) -> f32 {
        self.sharpness
    }

    /// Raw, possibly unnormalized direction
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Spatial frequency term: `2 / wavelength`
    pub fn frequency(&self) -> f32 {
        2.0 / self.wavelength
    }

    /// Temporal phase rate: `2 * speed / wavelength`
    pub fn phase_speed(&self) -> f32 {
        2.0 * self.speed / self.wavelength
    }

    /// Write a single scalar field; the wave is left untouched on error
    ///
    /// Wavelength and speed are also rejected when `frequency()` or
    /// `phase_speed()` would overflow.
    pub fn set(&mut self, field: WaveField, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(OceanError::NonFiniteParameter {
                field: field.name(),
                value,
            });
        }

        let mut next = *self;
        match field {
            WaveField::Wavelength if value == 0.0 => return Err(OceanError::ZeroWavelength),
            WaveField::Wavelength => next.wavelength = value,
            WaveField::Amplitude => next.amplitude = value,
            WaveField::Speed => next.speed = value,
            WaveField::Sharpness => next.sharpness = value,
            WaveField::DirectionX => next.direction.x = value,
            WaveField::DirectionY => next.direction.y = value,
        }

        if !next.frequency().is_finite() || !next.phase_speed().is_finite() {
            return Err(OceanError::DegenerateWave {
                wavelength: next.wavelength,
                speed: next.speed,
            });
        }
        *self = next;
        Ok(())
    }
}

/// Ordered, index-addressable list of waves plus the active algorithm
///
/// Order only matters for addressing; the displacement sum is commutative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveParameterSet {
    waves: Vec<WaveDefinition>,
    algorithm: WaveAlgorithm,
}

impl WaveParameterSet {
    /// Empty set (evaluates to a flat grid)
    pub fn new(algorithm: WaveAlgorithm) -> Self {
        Self {
            waves: Vec::new(),
            algorithm,
        }
    }

    /// One default wave with summation of sines
    pub fn single_default() -> Self {
        let mut set = Self::default();
        set.push_default();
        set
    }

    pub fn algorithm(&self) -> WaveAlgorithm {
        self.algorithm
    }

    /// Takes effect on the next rebuild
    pub fn set_algorithm(&mut self, algorithm: WaveAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WaveDefinition> {
        self.waves.iter()
    }

    pub fn get(&self, index: usize) -> Result<&WaveDefinition> {
        self.waves.get(index).ok_or(OceanError::WaveIndexOutOfRange {
            index,
            len: self.waves.len(),
        })
    }

    /// Append a default wave and return its index
    pub fn push_default(&mut self) -> usize {
        self.push(WaveDefinition::default())
    }

    /// Append an already validated wave and return its index
    pub fn push(&mut self, wave: WaveDefinition) -> usize {
        self.waves.push(wave);
        self.waves.len() - 1
    }

    /// Remove the wave at `index`, shifting later waves down by one
    pub fn remove(&mut self, index: usize) -> Result<WaveDefinition> {
        self.check_index(index)?;
        Ok(self.waves.remove(index))
    }

    /// Set one scalar field of wave `index`
    pub fn set_field(&mut self, index: usize, field: WaveField, value: f32) -> Result<()> {
        self.check_index(index)?;
        self.waves[index].set(field, value)
    }

    pub fn set_amplitude(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::Amplitude, value)
    }

    pub fn set_wavelength(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::Wavelength, value)
    }

    pub fn set_speed(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::Speed, value)
    }

    pub fn set_sharpness(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::Sharpness, value)
    }

    pub fn set_direction_x(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::DirectionX, value)
    }

    pub fn set_direction_y(&mut self, index: usize, value: f32) -> Result<()> {
        self.set_field(index, WaveField::DirectionY, value)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.waves.len() {
            Ok(())
        } else {
            Err(OceanError::WaveIndexOutOfRange {
                index,
                len: self.waves.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wave_parameters() {
        let wave = WaveDefinition::default();
        assert_eq!(wave.wavelength(), 1.0);
        assert_eq!(wave.amplitude(), 1.0);
        assert_eq!(wave.speed(), 0.0);
        assert_eq!(wave.sharpness(), 1.0);
        assert_eq!(wave.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_frequency_and_phase_speed() {
        let wave = WaveDefinition::new(4.0, 1.0, 3.0, 1.0, Vec2::X).unwrap();
        assert_eq!(wave.frequency(), 0.5);
        assert_eq!(wave.phase_speed(), 1.5);
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        assert!(matches!(
            WaveDefinition::new(0.0, 1.0, 0.0, 1.0, Vec2::X),
            Err(OceanError::ZeroWavelength)
        ));

        let mut set = WaveParameterSet::single_default();
        assert!(matches!(
            set.set_wavelength(0, 0.0),
            Err(OceanError::ZeroWavelength)
        ));
        // Rejected edit leaves the stored value alone
        assert_eq!(set.get(0).unwrap().wavelength(), 1.0);
    }

    #[test]
    fn test_tiny_wavelength_rejected() {
        // 2 / 1e-39 overflows f32
        assert!(matches!(
            WaveDefinition::new(1e-39, 1.0, 0.0, 1.0, Vec2::X),
            Err(OceanError::DegenerateWave { .. })
        ));

        // Frequency is finite but 2 * speed / wavelength is not
        let mut set = WaveParameterSet::single_default();
        set.set_wavelength(0, 1e-30).unwrap();
        assert!(matches!(
            set.set_speed(0, 1e10),
            Err(OceanError::DegenerateWave { .. })
        ));
        assert_eq!(set.get(0).unwrap().speed(), 0.0);

        // Same pair reached from the other side
        set.set_wavelength(0, 1.0).unwrap();
        set.set_speed(0, 1e10).unwrap();
        assert!(set.set_wavelength(0, 1e-30).is_err());
        assert_eq!(set.get(0).unwrap().wavelength(), 1.0);

        let wave = set.get(0).unwrap();
        assert!(wave.frequency().is_finite() && wave.phase_speed().is_finite());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut set = WaveParameterSet::single_default();
        let err = set.set_amplitude(0, f32::NAN).unwrap_err();
        assert!(matches!(
            err,
            OceanError::NonFiniteParameter {
                field: "amplitude",
                ..
            }
        ));
        assert!(set.set_direction_y(0, f32::INFINITY).is_err());
        assert_eq!(set.get(0).unwrap().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_setters_by_index() {
        let mut set = WaveParameterSet::new(WaveAlgorithm::Gerstner);
        set.push_default();
        let idx = set.push_default();

        set.set_amplitude(idx, 2.5).unwrap();
        set.set_wavelength(idx, 8.0).unwrap();
        set.set_speed(idx, 1.5).unwrap();
        set.set_sharpness(idx, 0.3).unwrap();
        set.set_direction_x(idx, 1.0).unwrap();
        set.set_direction_y(idx, -2.0).unwrap();

        let wave = set.get(idx).unwrap();
        assert_eq!(wave.amplitude(), 2.5);
        assert_eq!(wave.wavelength(), 8.0);
        assert_eq!(wave.speed(), 1.5);
        assert_eq!(wave.sharpness(), 0.3);
        assert_eq!(wave.direction(), Vec2::new(1.0, -2.0));

        // First wave untouched
        assert_eq!(*set.get(0).unwrap(), WaveDefinition::default());
    }

    #[test]
    fn test_out_of_range_edits_fail() {
        let mut set = WaveParameterSet::single_default();
        assert!(matches!(
            set.set_speed(1, 1.0),
            Err(OceanError::WaveIndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            set.remove(3),
            Err(OceanError::WaveIndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_shifts_indices_down() {
        let mut set = WaveParameterSet::default();
        for amplitude in [1.0, 2.0, 3.0] {
            let idx = set.push_default();
            set.set_amplitude(idx, amplitude).unwrap();
        }

        let removed = set.remove(1).unwrap();
        assert_eq!(removed.amplitude(), 2.0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().amplitude(), 3.0);
    }

    #[test]
    fn test_algorithm_selection() {
        let mut set = WaveParameterSet::default();
        assert_eq!(set.algorithm(), WaveAlgorithm::SummationOfSines);
        set.set_algorithm(WaveAlgorithm::Gerstner);
        assert_eq!(set.algorithm(), WaveAlgorithm::Gerstner);
    }
}
