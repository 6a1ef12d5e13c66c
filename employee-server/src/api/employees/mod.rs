//! Employee API Module
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | GET | /employee | 全部员工 |
//! | GET | /employee/stream | SSE 推送, 每条间隔 ≥ 1s |
//! | GET | /employee/{id} | 单个员工, 不存在时返回空 body |
//! | GET | /employee/salary-range?min=&max= | 薪资区间 [min, max] |
//! | POST | /employee/save | 新建 (带 id 时按 id 覆盖) |
//! | PUT | /employee/update/{id} | 更新, 不存在时返回空 body |
//! | DELETE | /employee/delete/{id} | 删除 (幂等) |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee", get(handler::list))
        .route("/employee/stream", get(handler::stream))
        .route("/employee/salary-range", get(handler::salary_range))
        .route("/employee/save", post(handler::save))
        .route("/employee/update/{id}", put(handler::update))
        .route("/employee/delete/{id}", delete(handler::delete))
        .route("/employee/{id}", get(handler::get_by_id))
}
