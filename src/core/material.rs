/// Bulk material class of a sampled body.
///
/// Resolution from configuration codes is total: `1` is ice, `3` is iron,
/// and every other integer (including the documented default `2`) falls back
/// to rock. Unknown codes are a fallback, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Ice,
    Rock,
    Iron,
}

/// Canonical per-material properties.
///
/// Units: `density` kg/m^3, `strength` Pa. Strength is the ram-pressure
/// threshold above which the body fragments in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProfile {
    pub name: &'static str,
    pub density: f64,
    pub strength: f64,
}

impl Material {
    /// Resolve a configuration code to a material class.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Material::Ice,
            3 => Material::Iron,
            _ => Material::Rock,
        }
    }

    /// Canonical properties for this material class.
    pub fn profile(self) -> MaterialProfile {
        match self {
            Material::Ice => MaterialProfile {
                name: "ice (comet)",
                density: 1000.0,
                strength: 1.0e6,
            },
            Material::Rock => MaterialProfile {
                name: "rock (asteroid)",
                density: 2600.0,
                strength: 1.0e7,
            },
            Material::Iron => MaterialProfile {
                name: "iron (meteorite)",
                density: 7800.0,
                strength: 2.0e8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(Material::from_code(1), Material::Ice);
        assert_eq!(Material::from_code(2), Material::Rock);
        assert_eq!(Material::from_code(3), Material::Iron);
    }

    #[test]
    fn unknown_codes_fall_back_to_rock() {
        for code in [0, -1, 4, 42, i64::MIN, i64::MAX] {
            assert_eq!(
                Material::from_code(code),
                Material::Rock,
                "code {code} must resolve to the rock fallback"
            );
        }
    }

    #[test]
    fn profiles_order_by_strength() {
        let ice = Material::Ice.profile();
        let rock = Material::Rock.profile();
        let iron = Material::Iron.profile();
        assert!(ice.strength < rock.strength);
        assert!(rock.strength < iron.strength);
        assert!(ice.density < rock.density && rock.density < iron.density);
    }

    #[test]
    fn rock_profile_matches_canonical_table() {
        let rock = Material::Rock.profile();
        assert_eq!(rock.name, "rock (asteroid)");
        assert_eq!(rock.density, 2600.0);
        assert_eq!(rock.strength, 1.0e7);
    }
}
