pub mod birthday_reminder;
