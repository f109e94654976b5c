use bson::oid::ObjectId;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

use crate::server::{
    data::{collection::SortKey, project::ProjectRepository},
    model::project::{ProjectFields, TaskParam},
};

mod create;
mod get_all;
mod replace;

fn task(description: &str, tags: &[&str]) -> TaskParam {
    TaskParam {
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn crm_fields() -> ProjectFields {
    ProjectFields {
        name: "CRM".to_string(),
        description: "Description Project".to_string(),
        tasks: vec![
            task("Golang", &["BACKEND"]),
            task("Mongodb", &["BACKEND"]),
            task("ReactJS", &["FRONTEND"]),
        ],
    }
}
