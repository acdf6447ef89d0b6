//! Domain models for the back office.

pub mod activity_log;
pub mod admin_user;
pub mod customer;
pub mod order;
pub mod product;
pub mod session;

pub use activity_log::{ActivityLogEntry, NewActivityLog};
pub use admin_user::{AdminUser, CurrentAdmin};
pub use customer::{CustomerStats, CustomerSummary};
pub use order::{Order, OrderItemDetail, OrderWithItems};
pub use product::{NewProduct, Product, ProductPayload};
pub use session::AdminSession;
