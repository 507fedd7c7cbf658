mod create_form;
mod filter_button;
mod summary;
mod todo_item;
mod todos_card;

pub use todos_card::TodosCard;
