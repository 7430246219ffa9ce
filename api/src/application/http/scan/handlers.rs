pub mod analyze_image;
pub mod analyze_text;
pub mod get_scan;
pub mod get_user_scans;
