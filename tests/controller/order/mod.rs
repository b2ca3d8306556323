mod initiate_payment;
mod notify;
