pub mod model;
pub mod view;
pub mod view_model;
pub mod working_hours_editor;

pub use view::CompanyDetails;
