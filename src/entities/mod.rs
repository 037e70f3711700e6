//! Entity module - SeaORM entity definitions for every stored collection.
//! Each entity has a Model struct for data and an Entity struct for operations.
//!
//! Collections deliberately carry no foreign keys: a record whose employee has
//! been deleted stays in place and simply stops resolving to a name.

pub mod advance;
pub mod employee;
pub mod entrepreneur;
pub mod harvest;
pub mod profile;
pub mod rain_event;
pub mod settings;
pub mod work_task;

// Re-export specific types to avoid conflicts
pub use advance::{
    Column as AdvanceColumn, Entity as Advance, ExpenseCategory, Model as AdvanceModel,
    PaymentMethod,
};
pub use employee::{
    Column as EmployeeColumn, Crop, EmployeeStatus, Entity as Employee, Model as EmployeeModel,
};
pub use entrepreneur::{
    Column as EntrepreneurColumn, Entity as Entrepreneur, Model as EntrepreneurModel,
};
pub use harvest::{Column as HarvestColumn, Entity as Harvest, Model as HarvestModel};
pub use profile::{Column as ProfileColumn, Entity as Profile, Model as ProfileModel, Role};
pub use rain_event::{
    Column as RainEventColumn, Entity as RainEvent, Model as RainEventModel, RainIntensity,
    RainPeriod,
};
pub use settings::{Column as SettingsColumn, Entity as Settings, Model as SettingsModel};
pub use work_task::{Column as WorkTaskColumn, Entity as WorkTask, Model as WorkTaskModel};
