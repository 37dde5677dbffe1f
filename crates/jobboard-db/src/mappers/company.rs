//! Company entity <-> model mapper

use jobboard_core::entities::Company;

use crate::models::CompanyModel;

impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            website: model.website,
            logo: model.logo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
