use crate::server::data::code_sequence::CodeSequenceRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
