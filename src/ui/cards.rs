/// Employee card grid
///
/// One card per record, flowing left-to-right and wrapping onto new rows as
/// the window allows.

use iced::widget::{column, container, text};
use iced::Element;
use iced_aw::Wrap;

use crate::state::data::Employee;
use crate::Message;

/// Fixed card width so the grid wraps into even columns
const CARD_WIDTH: f32 = 260.0;

/// Build the wrapped grid of employee cards
///
/// An empty record list yields an empty grid; the caller decides whether a
/// loading indicator takes its place.
pub fn employee_grid(employees: &[Employee]) -> Element<'_, Message> {
    let cards: Vec<Element<Message>> = employees.iter().map(employee_card).collect();

    Wrap::with_elements(cards)
        .spacing(15.0)
        .line_spacing(15.0)
        .into()
}

/// A single card: name heading plus the labeled detail lines
fn employee_card(employee: &Employee) -> Element<'_, Message> {
    let details = column![
        text(&employee.name).size(22),
        text(format!("Age: {}", employee.age)),
        text(format!("Phone: {}", employee.phone_number)),
        text(format!("Address: {}", employee.home_address)),
        text(format!("Created: {}", employee.created_date())),
    ]
    .spacing(6);

    container(details)
        .padding(15)
        .width(CARD_WIDTH)
        .style(container::rounded_box)
        .into()
}
