pub mod analysis;
pub mod scan;
pub mod scan_details;
pub mod scan_result;
pub mod scan_summary;

pub use analysis::*;
pub use scan::*;
pub use scan_details::*;
pub use scan_result::*;
pub use scan_summary::*;
