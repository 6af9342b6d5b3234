mod event;
mod poll;
