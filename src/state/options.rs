//! Fixed option sets offered by the host's Deals module

/// Areas of interest a prospect can ask about
///
/// Labels must match the host picklist values exactly, including the
/// typographic apostrophe in the college-education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaOfInterest {
    LivingTrustSetup,
    ExistingTrustReview,
    EstateTaxPlanning,
    GiftingStrategies,
    AssetProtection,
    CollegeSavings,
    LifeInsuranceReview,
    LongTermCare,
    MinorGuardianship,
    VeteransCare,
    RetirementPlanning,
}

impl AreaOfInterest {
    /// Every option, in the order the host picklist presents them
    pub const ALL: [AreaOfInterest; 11] = [
        AreaOfInterest::LivingTrustSetup,
        AreaOfInterest::ExistingTrustReview,
        AreaOfInterest::EstateTaxPlanning,
        AreaOfInterest::GiftingStrategies,
        AreaOfInterest::AssetProtection,
        AreaOfInterest::CollegeSavings,
        AreaOfInterest::LifeInsuranceReview,
        AreaOfInterest::LongTermCare,
        AreaOfInterest::MinorGuardianship,
        AreaOfInterest::VeteransCare,
        AreaOfInterest::RetirementPlanning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LivingTrustSetup => "Setting Up A Living Trust",
            Self::ExistingTrustReview => "Review of My Existing Trust",
            Self::EstateTaxPlanning => "Estate Tax Planning",
            Self::GiftingStrategies => "Gifting Strategies",
            Self::AssetProtection => "Asset Protection",
            Self::CollegeSavings => "Saving for a Beneficiary’s College Education",
            Self::LifeInsuranceReview => "Life Insurance / Annuity Review",
            Self::LongTermCare => "Disability / Long-Term Nursing Care / Medi-Cal Planning",
            Self::MinorGuardianship => "Guardianship of Minor Children",
            Self::VeteransCare => "Veterans Long-Term Care Planning",
            Self::RetirementPlanning => "Retirement Planning",
        }
    }
}

/// Office that will handle the deal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClgOffice {
    Davis,
    Roseville,
    Sacramento,
    SanAntonio,
}

impl ClgOffice {
    /// Every office, in the order the host picklist presents them
    pub const ALL: [ClgOffice; 4] = [
        ClgOffice::Davis,
        ClgOffice::Roseville,
        ClgOffice::Sacramento,
        ClgOffice::SanAntonio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Davis => "Davis Office",
            Self::Roseville => "Roseville Office",
            Self::Sacramento => "Sacramento Office",
            Self::SanAntonio => "San Antonio",
        }
    }
}
