//! Statutory category abbreviations recognized in raw offense codes.

/// A body of California law an offense code can belong to.
///
/// Raw commitment records prefix offense codes with a two-letter category
/// abbreviation (`PC187`, `VC10851`). The severity reference tables are
/// keyed by the bare code, so the prefix is stripped during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatuteCategory {
    PenalCode,
    VehicleCode,
    HealthSafetyCode,
    BusinessProfessionsCode,
    WelfareInstitutionsCode,
    CivilCode,
}

impl StatuteCategory {
    /// Recognized categories in prefix-match priority order.
    ///
    /// Prefix stripping checks these in declaration order and stops on the
    /// first leading match.
    pub const ALL: [StatuteCategory; 6] = [
        StatuteCategory::PenalCode,
        StatuteCategory::VehicleCode,
        StatuteCategory::HealthSafetyCode,
        StatuteCategory::BusinessProfessionsCode,
        StatuteCategory::WelfareInstitutionsCode,
        StatuteCategory::CivilCode,
    ];

    /// The two-letter abbreviation used as a prefix in raw codes.
    pub fn abbreviation(self) -> &'static str {
        match self {
            StatuteCategory::PenalCode => "PC",
            StatuteCategory::VehicleCode => "VC",
            StatuteCategory::HealthSafetyCode => "HS",
            StatuteCategory::BusinessProfessionsCode => "BP",
            StatuteCategory::WelfareInstitutionsCode => "WI",
            StatuteCategory::CivilCode => "CC",
        }
    }

    /// Human-readable name of the body of law.
    pub fn body_of_law(self) -> &'static str {
        match self {
            StatuteCategory::PenalCode => "Penal Code",
            StatuteCategory::VehicleCode => "Vehicle Code",
            StatuteCategory::HealthSafetyCode => "Health and Safety Code",
            StatuteCategory::BusinessProfessionsCode => "Business and Professions Code",
            StatuteCategory::WelfareInstitutionsCode => "Welfare and Institutions Code",
            StatuteCategory::CivilCode => "Civil Code",
        }
    }
}
