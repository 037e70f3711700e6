//! Choice parameters shown as dropdowns in slash commands.
//!
//! Each one converts into the closed domain enum it stands for.

use crate::entities::{
    Crop, EmployeeStatus, ExpenseCategory, PaymentMethod, RainIntensity, RainPeriod, Role,
};

/// Crop choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum CropChoice {
    /// Rubber
    #[name = "Hevea"]
    Hevea,
    /// Cocoa
    #[name = "Cacao"]
    Cacao,
}

impl From<CropChoice> for Crop {
    fn from(value: CropChoice) -> Self {
        match value {
            CropChoice::Hevea => Self::Hevea,
            CropChoice::Cacao => Self::Cacao,
        }
    }
}

/// Expense category choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum CategoryChoice {
    /// Salary advance
    #[name = "Salary advance"]
    Advance,
    /// Fertilizer
    #[name = "Fertilizer / products"]
    Fertilizer,
    /// Equipment
    #[name = "Equipment"]
    Equipment,
    /// Transport
    #[name = "Transport"]
    Transport,
    /// Exceptional work
    #[name = "Exceptional work"]
    ExceptionalWork,
    /// Miscellaneous
    #[name = "Miscellaneous"]
    Misc,
}

impl From<CategoryChoice> for ExpenseCategory {
    fn from(value: CategoryChoice) -> Self {
        match value {
            CategoryChoice::Advance => Self::Advance,
            CategoryChoice::Fertilizer => Self::Fertilizer,
            CategoryChoice::Equipment => Self::Equipment,
            CategoryChoice::Transport => Self::Transport,
            CategoryChoice::ExceptionalWork => Self::ExceptionalWork,
            CategoryChoice::Misc => Self::Misc,
        }
    }
}

/// Payment method choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PaymentChoice {
    /// Cash
    #[name = "Cash"]
    Cash,
    /// Transfer
    #[name = "Transfer"]
    Transfer,
}

impl From<PaymentChoice> for PaymentMethod {
    fn from(value: PaymentChoice) -> Self {
        match value {
            PaymentChoice::Cash => Self::Cash,
            PaymentChoice::Transfer => Self::Transfer,
        }
    }
}

/// Rain intensity choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum IntensityChoice {
    /// Light
    #[name = "Light"]
    Light,
    /// Moderate
    #[name = "Moderate"]
    Moderate,
    /// Heavy
    #[name = "Heavy"]
    Heavy,
}

impl From<IntensityChoice> for RainIntensity {
    fn from(value: IntensityChoice) -> Self {
        match value {
            IntensityChoice::Light => Self::Light,
            IntensityChoice::Moderate => Self::Moderate,
            IntensityChoice::Heavy => Self::Heavy,
        }
    }
}

/// Part of the day choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PeriodChoice {
    /// Morning
    #[name = "Morning"]
    Morning,
    /// Afternoon
    #[name = "Afternoon"]
    Afternoon,
    /// Night
    #[name = "Night"]
    Night,
}

impl From<PeriodChoice> for RainPeriod {
    fn from(value: PeriodChoice) -> Self {
        match value {
            PeriodChoice::Morning => Self::Morning,
            PeriodChoice::Afternoon => Self::Afternoon,
            PeriodChoice::Night => Self::Night,
        }
    }
}

/// Employee status choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StatusChoice {
    /// Working
    #[name = "Active"]
    Active,
    /// Left the plantation
    #[name = "Resigned"]
    Resigned,
}

impl From<StatusChoice> for EmployeeStatus {
    fn from(value: StatusChoice) -> Self {
        match value {
            StatusChoice::Active => Self::Active,
            StatusChoice::Resigned => Self::Resigned,
        }
    }
}

/// Role choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum RoleChoice {
    /// Administrator
    #[name = "Admin"]
    Admin,
    /// Manager
    #[name = "Manager"]
    Manager,
    /// Worker
    #[name = "Worker"]
    Worker,
}

impl From<RoleChoice> for Role {
    fn from(value: RoleChoice) -> Self {
        match value {
            RoleChoice::Admin => Self::Admin,
            RoleChoice::Manager => Self::Manager,
            RoleChoice::Worker => Self::Worker,
        }
    }
}

/// Collection a record can be deleted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum RecordKind {
    /// `harvests`
    #[name = "Harvest"]
    Harvest,
    /// `work_tasks`
    #[name = "Task"]
    Task,
    /// `advances`
    #[name = "Advance / expense"]
    Advance,
    /// `rain_events`
    #[name = "Rain"]
    Rain,
    /// `employees`
    #[name = "Employee"]
    Employee,
    /// `entrepreneurs`
    #[name = "Entrepreneur"]
    Entrepreneur,
}
