mod code_sequence;
mod contact;
mod news;
