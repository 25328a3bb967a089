/// Address decomposition into segment, page and offset.
pub mod address_layout;
