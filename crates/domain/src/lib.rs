mod availability;
mod customer;
mod date;
mod reminder;
mod service_record;
mod shared;
mod vehicle;

pub use availability::{
    generate_slots, slots_strictly_increasing, DayAvailability, TimeSlot, WorkingHours,
};
pub use customer::Customer;
pub use date::{Day, InvalidDayError, InvalidSlotTimeError, SlotTime};
pub use reminder::{Reminder, ReminderType};
pub use service_record::{ServiceRecord, ServiceStatus};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use vehicle::Vehicle;
