use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::entities::patch_field::PatchField;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSegmentRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMemberRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAchievementRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxGalleryRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEventRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxFaqRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResourceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxNewsletterRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxApplicationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSearchRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxDashboardRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSitemapRepo {
    pub pool: PgPool,
}

/// Compute OFFSET safely from 1-based `page` and `per_page`.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    let page = page.saturating_sub(1);
    (page as i64) * (per_page as i64)
}

/// Append `, column = $n` to a dynamic UPDATE when a patch value is present.
pub(crate) fn push_opt<'args, T>(
    builder: &mut QueryBuilder<'args, Postgres>,
    column: &str,
    value: &Option<T>,
) where
    T: sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Clone + Send + 'args,
{
    if let Some(value) = value {
        builder.push(", ");
        builder.push(column);
        builder.push(" = ");
        builder.push_bind(value.clone());
    }
}

/// Append the SQL for a tri-state patch field: skipped when unchanged,
/// `= NULL` when cleared, `= $n` when set.
pub(crate) fn push_patch<'args, T>(
    builder: &mut QueryBuilder<'args, Postgres>,
    column: &str,
    field: &PatchField<T>,
) where
    T: sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Clone + Send + 'args,
{
    match field {
        PatchField::Unchanged => {}
        PatchField::SetToNull => {
            builder.push(", ");
            builder.push(column);
            builder.push(" = NULL");
        }
        PatchField::SetToValue(value) => {
            builder.push(", ");
            builder.push(column);
            builder.push(" = ");
            builder.push_bind(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_is_zero_based() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(2, 20), 20);
        assert_eq!(page_offset(3, 12), 24);
    }

    #[test]
    fn page_offset_tolerates_page_zero() {
        assert_eq!(page_offset(0, 20), 0);
    }

    #[test]
    fn push_patch_skips_unchanged_fields() {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE t SET updated_at = NOW()");
        push_patch(&mut builder, "photo", &PatchField::<String>::Unchanged);
        assert_eq!(builder.sql(), "UPDATE t SET updated_at = NOW()");
    }

    #[test]
    fn push_patch_writes_null_for_cleared_fields() {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE t SET updated_at = NOW()");
        push_patch(&mut builder, "photo", &PatchField::<String>::SetToNull);
        assert_eq!(builder.sql(), "UPDATE t SET updated_at = NOW(), photo = NULL");
    }

    #[test]
    fn push_patch_binds_new_values() {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE t SET updated_at = NOW()");
        push_patch(
            &mut builder,
            "photo",
            &PatchField::SetToValue("p.jpg".to_string()),
        );
        assert_eq!(builder.sql(), "UPDATE t SET updated_at = NOW(), photo = $1");
    }

    #[test]
    fn push_opt_binds_only_present_values() {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE t SET updated_at = NOW()");
        push_opt(&mut builder, "title", &None::<String>);
        push_opt(&mut builder, "icon", &Some("star".to_string()));
        assert_eq!(builder.sql(), "UPDATE t SET updated_at = NOW(), icon = $1");
    }
}
