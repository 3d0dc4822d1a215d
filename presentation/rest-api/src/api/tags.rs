use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Storefront section data of the cart popup
    PopupCart,
    /// Popup cart administration
    Admin,
}
