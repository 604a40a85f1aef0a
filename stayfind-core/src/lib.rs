pub mod criteria;
pub mod lookup;
pub mod rooms;

pub use criteria::{SearchCriteria, Visitors};
pub use lookup::{LookupError, RoomsLookup, RoomsQuery};
pub use rooms::{RoomOption, RoomsData, SearchOutcome};
