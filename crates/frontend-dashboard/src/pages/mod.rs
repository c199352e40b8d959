mod doctor;
mod login;
mod patient;
mod reception;

pub use doctor::DoctorDashboard;
pub use login::LoginPage;
pub use patient::PatientDashboard;
pub use reception::ReceptionDashboard;
