use strum::{Display, VariantArray};

/// Categories suggested by the contact page. The submitted value is free
/// text, these only populate the `<select>`.
#[derive(Display, VariantArray, Clone, Copy, Debug)]
pub enum Enquiry {
    General,
    Partnerships,
    Press,
    Careers,
    Support,
}
