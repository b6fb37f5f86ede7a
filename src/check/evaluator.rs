use tracing::warn;

use super::verdict::Verdict;
use crate::collector::LagSnapshot;

/// Сводит порты, агрегаты и членство в LAG к одному вердикту.
///
/// Каждый член LAG учитывается в счётчике, даже неактивный. Порт, у которого
/// selected aggregate не совпадает с attached, считается неактивным; такие
/// порты перечисляются в CRITICAL сообщении в порядке обхода. Хвостовая
/// ", " после последнего порта остаётся: на формат завязаны существующие
/// обработчики вывода.
pub fn evaluate(snapshot: &LagSnapshot) -> Verdict {
    let inventory = &snapshot.inventory;
    let mut active_count = 0usize;
    let mut problems = String::new();

    for member in &snapshot.memberships {
        active_count += 1;

        if member.is_inactive() {
            let port_name = inventory.port_name(member.port_index);
            let agg_name = inventory.aggregate_name(member.selected_agg_id);
            warn!(
                port_index = member.port_index,
                selected = member.selected_agg_id,
                attached = member.attached_agg_id,
                "Порт выбран в агрегат, но не присоединён"
            );
            problems.push_str(&format!("Port {} is inactive in {}, ", port_name, agg_name));
        }
    }

    if !problems.is_empty() {
        return Verdict::critical(format!("CRITICAL: {}", problems));
    }

    match active_count {
        0 => Verdict::ok("No lag is defined"),
        1 => Verdict::ok("OK: 1 port is active in lag"),
        n => Verdict::ok(format!("OK: {} ports are active in lag", n)),
    }
}
