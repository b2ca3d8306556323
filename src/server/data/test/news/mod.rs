use crate::server::{
    data::news::NewsRepository,
    model::news::{CreateNewsParams, UpdateNewsParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
