use serde::Deserialize;

/// Query of `GET /Sprint/edit`
#[derive(Debug, Deserialize)]
pub struct EditFormQuery {
    pub id: i64,
}

/// Query of `GET /Sprint/ChartDataTasks`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataQuery {
    pub sprint_id: i64,
}
