mod login;
mod register;
mod role;
mod service;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use role::UpdateUserRoleCommand;
pub use service::UserCommandService;
