//! Data models for the Libris API

pub mod book;
pub mod loan;
pub mod member;
pub mod session;
pub mod validators;

pub use book::{Book, BookInput, BookResponse, BookStatus, LoanInfo};
pub use loan::{ActiveLoan, BorrowRequest};
pub use member::{Member, MemberInput, MemberStatus, MembershipType};
pub use session::{LoginRequest, LoginResponse, SessionUser};
