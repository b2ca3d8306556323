use crate::server::{data::contact::ContactRepository, model::contact::SaveContactParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
