/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fcm;

#[doc(inline)]
pub use fcm::CM_TOL;
#[doc(inline)]
pub use fcm::FCM;
