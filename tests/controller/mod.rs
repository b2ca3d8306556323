mod contact;
mod fixture;
mod member;
mod news;
mod order;
