mod messages;
mod mint;
mod views;
