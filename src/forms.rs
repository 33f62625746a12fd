use log::warn;

/// How long a simulated-submission success banner stays up before the form
/// resets.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

/// Image attachments are capped; extra selections are silently dropped.
pub const MAX_IMAGES: usize = 5;

/// What the seller wants to do with the card being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingType {
    #[default]
    Sell,
    Trade,
    Both,
}

impl ListingType {
    pub const ALL: [ListingType; 3] = [ListingType::Sell, ListingType::Trade, ListingType::Both];

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Sell => "Alleen verkopen",
            ListingType::Trade => "Alleen ruilen",
            ListingType::Both => "Beide opties",
        }
    }

    pub fn price_required(&self) -> bool {
        matches!(self, ListingType::Sell | ListingType::Both)
    }

    pub fn wanted_trade_required(&self) -> bool {
        matches!(self, ListingType::Trade | ListingType::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

impl ContactMethod {
    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }

    pub fn from_value(value: &str) -> ContactMethod {
        if value == "phone" {
            ContactMethod::Phone
        } else {
            ContactMethod::Email
        }
    }

    pub fn phone_required(&self) -> bool {
        matches!(self, ContactMethod::Phone)
    }
}

/// A selected image: file name plus the object URL used for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub name: String,
    pub preview_url: String,
}

/// Field state for the sell/trade listing form. Inputs are keyed by their
/// `name` attribute, so updates dispatch through `set_field` the same way
/// for every control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellTradeForm {
    pub card_name: String,
    pub set: String,
    pub card_number: String,
    pub card_type: String,
    pub condition: String,
    pub price: String,
    pub wanted_trade: String,
    pub description: String,
    pub contact_method: ContactMethod,
    pub email: String,
    pub phone: String,
    pub listing_type: ListingType,
    pub images: Vec<ImageAttachment>,
}

impl SellTradeForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "card_name" => self.card_name = value,
            "set" => self.set = value,
            "card_number" => self.card_number = value,
            "type" => self.card_type = value,
            "condition" => self.condition = value,
            "price" => self.price = value,
            "wanted_trade" => self.wanted_trade = value,
            "description" => self.description = value,
            "contact_method" => self.contact_method = ContactMethod::from_value(&value),
            "email" => self.email = value,
            "phone" => self.phone = value,
            other => warn!("Ignoring unknown sell/trade field '{}'", other),
        }
    }

    /// Appends selections up to the cap; anything beyond is dropped without
    /// an error.
    pub fn add_images<I>(&mut self, selected: I)
    where
        I: IntoIterator<Item = ImageAttachment>,
    {
        self.images.extend(selected);
        self.images.truncate(MAX_IMAGES);
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn reset(&mut self) {
        *self = SellTradeForm::default();
    }
}

/// Field state for the contact page form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            other => warn!("Ignoring unknown contact field '{}'", other),
        }
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

/// Subject choices for the contact form.
pub const CONTACT_REASONS: [&str; 6] = [
    "Algemene vraag",
    "Interesse in een kaart",
    "Ruilvoorstel",
    "Kaart waardering",
    "Verzending/retour",
    "Andere",
];

/// State for the trade-proposal modal on the card detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TradeProposal {
    pub email: String,
    pub message: String,
}

impl TradeProposal {
    pub fn reset(&mut self) {
        *self = TradeProposal::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str) -> ImageAttachment {
        ImageAttachment {
            name: name.to_string(),
            preview_url: format!("blob:{}", name),
        }
    }

    #[test]
    fn image_list_never_exceeds_cap() {
        let mut form = SellTradeForm::default();
        form.add_images((0..4).map(|i| attachment(&format!("a{}.jpg", i))));
        assert_eq!(form.images.len(), 4);

        // Second upload pushes past the cap; extras are silently dropped.
        form.add_images((0..4).map(|i| attachment(&format!("b{}.jpg", i))));
        assert_eq!(form.images.len(), MAX_IMAGES);
        assert_eq!(form.images[4].name, "b0.jpg");
    }

    #[test]
    fn remove_image_ignores_out_of_range_index() {
        let mut form = SellTradeForm::default();
        form.add_images(vec![attachment("a.jpg"), attachment("b.jpg")]);
        form.remove_image(5);
        assert_eq!(form.images.len(), 2);
        form.remove_image(0);
        assert_eq!(form.images.len(), 1);
        assert_eq!(form.images[0].name, "b.jpg");
    }

    #[test]
    fn set_field_dispatches_on_input_name() {
        let mut form = SellTradeForm::default();
        form.set_field("card_name", "Charizard".to_string());
        form.set_field("price", "350.00".to_string());
        form.set_field("contact_method", "phone".to_string());
        assert_eq!(form.card_name, "Charizard");
        assert_eq!(form.price, "350.00");
        assert_eq!(form.contact_method, ContactMethod::Phone);
    }

    #[test]
    fn reset_returns_to_initial_values() {
        let mut form = SellTradeForm::default();
        form.set_field("card_name", "Pikachu".to_string());
        form.listing_type = ListingType::Both;
        form.add_images(vec![attachment("a.jpg")]);

        form.reset();
        assert_eq!(form, SellTradeForm::default());
    }

    #[test]
    fn wanted_trade_required_only_for_trade_listings() {
        assert!(!ListingType::Sell.wanted_trade_required());
        assert!(ListingType::Trade.wanted_trade_required());
        assert!(ListingType::Both.wanted_trade_required());
    }

    #[test]
    fn price_required_only_for_sale_listings() {
        assert!(ListingType::Sell.price_required());
        assert!(!ListingType::Trade.price_required());
        assert!(ListingType::Both.price_required());
    }

    #[test]
    fn phone_required_only_for_phone_contact() {
        assert!(!ContactMethod::Email.phone_required());
        assert!(ContactMethod::Phone.phone_required());
    }

    #[test]
    fn contact_form_reset_clears_all_fields() {
        let mut form = ContactForm::default();
        form.set_field("name", "Ash".to_string());
        form.set_field("subject", CONTACT_REASONS[0].to_string());
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
