mod layout;

pub use layout::DashboardShell;
