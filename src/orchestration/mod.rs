pub mod session;
pub mod view;

pub use session::SurgeSession;
pub use view::SurgeView;
