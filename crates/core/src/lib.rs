pub mod category;
pub mod draft;
pub mod money;
pub mod payment;
pub mod reference;

pub use category::Category;
pub use draft::{DraftError, DraftField, ReceiptDraft};
pub use money::Money;
pub use payment::PaymentMethod;
pub use reference::{ReferenceError, ReferenceList, ReferenceOption};
