pub fn render_index(from: &str, to: &str, login_url: &str) -> String {
    INDEX_HTML
        .replace("{{FROM}}", from)
        .replace("{{TO}}", to)
        .replace("{{LOGIN_URL}}", login_url)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Overview</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #22303c;
      --muted: #71808e;
      --accent: #2563eb;
      --ok: #15803d;
      --warn: #b45309;
      --bad: #b91c1c;
      --card: #ffffff;
      --line: rgba(34, 48, 60, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      padding: 28px 20px 48px;
    }

    main {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 22px;
    }

    header h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    header p {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .range-bar {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 14px 16px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .presets {
      display: flex;
      gap: 6px;
    }

    .preset {
      border: 1px solid var(--line);
      background: transparent;
      border-radius: 8px;
      padding: 7px 12px;
      font-size: 0.9rem;
      color: var(--muted);
      cursor: pointer;
    }

    .preset.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .dates {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .dates input {
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 6px 8px;
      font: inherit;
      color: var(--ink);
    }

    .refresh {
      margin-left: auto;
      border: none;
      border-radius: 8px;
      background: var(--accent);
      color: white;
      padding: 8px 18px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
    }

    .refresh:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--bad);
    }

    section h2 {
      margin: 0 0 10px;
      font-size: 1.1rem;
    }

    .caption {
      color: var(--muted);
      font-size: 0.85rem;
      margin: 0 0 10px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 14px 16px;
      display: grid;
      gap: 4px;
    }

    .card .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .card .value {
      font-size: 1.45rem;
      font-weight: 600;
    }

    .card .amount {
      font-size: 0.88rem;
      color: var(--muted);
    }

    .value.paid { color: var(--ok); }
    .value.pending { color: var(--warn); }
    .value.refunded { color: var(--bad); }

    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      overflow: hidden;
    }

    th, td {
      text-align: left;
      padding: 10px 14px;
      font-size: 0.9rem;
      border-bottom: 1px solid var(--line);
    }

    th {
      background: rgba(37, 99, 235, 0.06);
      color: var(--muted);
      font-weight: 600;
    }

    tr:last-child td {
      border-bottom: none;
    }

    td.num {
      text-align: right;
      font-variant-numeric: tabular-nums;
    }

    .empty {
      color: var(--muted);
      font-style: italic;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Overview</h1>
      <p>Orders, inventory, users and withdrawals for the selected reporting range.</p>
    </header>

    <div class="range-bar">
      <div class="presets" role="group" aria-label="Reporting range presets">
        <button class="preset" type="button" data-preset="today">Today</button>
        <button class="preset active" type="button" data-preset="last_7_days">Last 7 days</button>
        <button class="preset" type="button" data-preset="last_30_days">Last 30 days</button>
      </div>
      <div class="dates">
        <label for="from">From</label>
        <input id="from" type="date" value="{{FROM}}" />
        <label for="to">To</label>
        <input id="to" type="date" value="{{TO}}" />
      </div>
      <button class="refresh" id="refresh" type="button">Refresh</button>
    </div>

    <div class="status" id="status"></div>

    <section>
      <h2>Product orders</h2>
      <div class="grid">
        <div class="card">
          <span class="label">Paid</span>
          <span class="value paid" id="po-paid-count">--</span>
          <span class="amount" id="po-paid-amount"></span>
        </div>
        <div class="card">
          <span class="label">Pending</span>
          <span class="value pending" id="po-pending-count">--</span>
          <span class="amount" id="po-pending-amount"></span>
        </div>
        <div class="card">
          <span class="label">Refunded</span>
          <span class="value refunded" id="po-refunded-count">--</span>
          <span class="amount" id="po-refunded-amount"></span>
        </div>
      </div>
    </section>

    <section>
      <h2>Recharge orders</h2>
      <div class="grid">
        <div class="card">
          <span class="label">Paid</span>
          <span class="value paid" id="ro-paid-count">--</span>
          <span class="amount" id="ro-paid-amount"></span>
        </div>
        <div class="card">
          <span class="label">Pending</span>
          <span class="value pending" id="ro-pending-count">--</span>
          <span class="amount" id="ro-pending-amount"></span>
        </div>
        <div class="card">
          <span class="label">Refunded</span>
          <span class="value refunded" id="ro-refunded-count">--</span>
          <span class="amount" id="ro-refunded-amount"></span>
        </div>
      </div>
    </section>

    <section>
      <h2>Channel inventory</h2>
      <p class="caption" id="range-caption"></p>
      <table aria-label="Channel inventory">
        <thead>
          <tr><th>Channel</th><th>Total</th><th>Unused</th></tr>
        </thead>
        <tbody id="stock-body">
          <tr><td class="empty" colspan="3">No data loaded yet</td></tr>
        </tbody>
      </table>
    </section>

    <section>
      <h2>Users and withdrawals</h2>
      <div class="grid">
        <div class="card">
          <span class="label">Registered users</span>
          <span class="value" id="user-total">--</span>
        </div>
        <div class="card">
          <span class="label">Pending withdrawals</span>
          <span class="value pending" id="wd-count">--</span>
          <span class="amount" id="wd-amount"></span>
        </div>
      </div>
    </section>
  </main>

  <script>
    const fromEl = document.getElementById('from');
    const toEl = document.getElementById('to');
    const statusEl = document.getElementById('status');
    const stockBody = document.getElementById('stock-body');
    const rangeCaption = document.getElementById('range-caption');
    const presetButtons = Array.from(document.querySelectorAll('.preset'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const count = (value) => Number(value).toLocaleString();
    const money = (value) =>
      Number(value).toLocaleString(undefined, {
        minimumFractionDigits: 2,
        maximumFractionDigits: 2
      });

    const setActivePreset = (preset) => {
      presetButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.preset === preset);
      });
    };

    // A manual date edit means custom mode: no preset button stays lit.
    const markCustom = () => setActivePreset(null);

    const renderOrders = (prefix, orders) => {
      document.getElementById(prefix + '-paid-count').textContent = count(orders.paid_count);
      document.getElementById(prefix + '-paid-amount').textContent = money(orders.paid_amount);
      document.getElementById(prefix + '-pending-count').textContent = count(orders.pending_count);
      document.getElementById(prefix + '-pending-amount').textContent = money(orders.pending_amount);
      document.getElementById(prefix + '-refunded-count').textContent = count(orders.refunded_count);
      document.getElementById(prefix + '-refunded-amount').textContent = money(orders.refunded_amount);
    };

    const renderStock = (rows) => {
      if (!rows.length) {
        stockBody.innerHTML = '<tr><td class="empty" colspan="3">No channels in this range</td></tr>';
        return;
      }
      stockBody.innerHTML = rows
        .map((row) => {
          const cell = document.createElement('td');
          cell.textContent = row.channel;
          return `<tr>${cell.outerHTML}<td class="num">${count(row.total)}</td><td class="num">${count(row.unused)}</td></tr>`;
        })
        .join('');
    };

    const render = (snapshot) => {
      renderOrders('po', snapshot.product_orders);
      renderOrders('ro', snapshot.recharge_orders);
      renderStock(snapshot.channel_stock);
      document.getElementById('user-total').textContent = count(snapshot.user_total);
      document.getElementById('wd-count').textContent = count(snapshot.withdrawals.pending_count);
      document.getElementById('wd-amount').textContent = money(snapshot.withdrawals.pending_amount);
      rangeCaption.textContent = `Showing ${snapshot.range.from} to ${snapshot.range.to}`;
    };

    const loadOverview = async () => {
      setStatus('Loading...', 'info');
      const params = new URLSearchParams({ from: fromEl.value, to: toEl.value });
      const res = await fetch(`/api/overview?${params}`);

      if (res.status === 401) {
        window.location.assign('{{LOGIN_URL}}');
        return;
      }
      if (!res.ok) {
        // Leave whatever was rendered before in place.
        const message = await res.text();
        setStatus(message || 'Unable to load overview', 'error');
        return;
      }

      render(await res.json());
      setStatus('', '');
    };

    const applyPreset = async (preset) => {
      const res = await fetch(`/api/range?preset=${preset}`);
      if (!res.ok) {
        setStatus('Unable to resolve range preset', 'error');
        return;
      }
      const range = await res.json();
      // Programmatic writes: input.value assignment fires no change event,
      // so the custom-mode rule stays quiet.
      fromEl.value = range.from;
      toEl.value = range.to;
      setActivePreset(preset);
      await loadOverview();
    };

    presetButtons.forEach((button) => {
      button.addEventListener('click', () => {
        applyPreset(button.dataset.preset).catch((err) => setStatus(err.message, 'error'));
      });
    });

    fromEl.addEventListener('change', markCustom);
    toEl.addEventListener('change', markCustom);

    document.getElementById('refresh').addEventListener('click', () => {
      loadOverview().catch((err) => setStatus(err.message, 'error'));
    });

    loadOverview().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_initial_window_and_login_url() {
        let page = render_index("2024-03-04", "2024-03-10", "/login");
        assert!(page.contains(r#"value="2024-03-04""#));
        assert!(page.contains(r#"value="2024-03-10""#));
        assert!(page.contains("window.location.assign('/login')"));
        assert!(!page.contains("{{FROM}}"));
    }
}
