use crate::database::models::{MenuItem, Restaurant};

fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Prefilled order text exactly as it should land in the diner's
/// message box.
pub fn order_message(item: &MenuItem, restaurant_name: &str) -> String {
    format!(
        "Hi! I'd like to order: {} (${:.2}) from {}",
        item.name, item.price, restaurant_name
    )
}

/// WhatsApp deep link for ordering `item`, or None when the restaurant
/// phone number has no digits to dial.
pub fn order_link(restaurant: &Restaurant, item: &MenuItem) -> Option<String> {
    let phone = restaurant
        .phone
        .as_deref()
        .map(digits_only)
        .filter(|digits| !digits.is_empty())?;

    let message = order_message(item, &restaurant.name);
    Some(format!(
        "https://wa.me/{}?text={}",
        phone,
        urlencoding::encode(&message)
    ))
}
