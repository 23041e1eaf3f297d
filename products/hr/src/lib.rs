//! HR vertical slice: the employee directory.
//!
//! - `model` - the `Employee` record and its JSON shape
//! - `repository` - the `EmployeeRepository` port plus an in-memory adapter
//! - `store` - the sea-orm adapter over the `employees` table
//! - `service` - `EmployeeService`, which owns the not-found policy
//!
//! The service takes its repository by constructor, so any adapter can be
//! injected by the binary or by tests.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{HrError, HrResult};
pub use model::{Employee, EmployeeId};
pub use repository::{EmployeeRepository, FixtureError, InMemoryEmployeeRepository};
pub use service::EmployeeService;
pub use store::SeaOrmEmployeeRepository;
