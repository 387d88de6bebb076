pub mod datasets;
pub mod highlight;
pub mod outside_click;
pub mod playground;
pub mod select_dropdown;
