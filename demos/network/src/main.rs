use graph::{Graph, ShortestPath, VertexId, Weight};
use std::rc::Rc;
use util::{HashTable, OrderedMap, Stack};

/// Station names keyed by id, plus the routes between them. The graph is derived state.
struct Network {
    stations: OrderedMap<VertexId, String>,
    routes: Vec<(VertexId, VertexId, Weight)>,
    by_name: HashTable<String, VertexId>,
    graph: Graph,
}

enum Action {
    AddStation(VertexId),
    RemoveStation(VertexId, String, Vec<(VertexId, VertexId, Weight)>),
}

impl Network {
    fn new() -> Self {
        Self {
            stations: OrderedMap::new(),
            routes: vec![],
            by_name: HashTable::with_buckets(7),
            graph: Graph::new(),
        }
    }

    fn add_station(&mut self, id: VertexId, name: &str) -> Action {
        self.stations.insert(id, name.to_string());
        self.by_name.insert(name.to_string(), id);
        self.graph.add_vertex(id);
        Action::AddStation(id)
    }

    fn add_route(&mut self, from: &str, to: &str, distance: Weight) {
        let (Some(&u), Some(&v)) = (self.by_name.search(from), self.by_name.search(to)) else {
            println!("unknown station in route {from} - {to}");
            return;
        };
        if self.graph.add_edge(u, v, distance).is_ok() {
            self.routes.push((u, v, distance));
        }
    }

    fn remove_station(&mut self, name: &str) -> Option<Action> {
        let id = self.by_name.remove(name)?;
        let name = self.stations.remove(&id)?;
        let (dropped, kept) = std::mem::take(&mut self.routes)
            .into_iter()
            .partition::<Vec<_>, _>(|(u, v, _)| *u == id || *v == id);
        self.routes = kept;
        self.rebuild();
        Some(Action::RemoveStation(id, name, dropped))
    }

    fn undo(&mut self, action: Action) {
        match action {
            Action::AddStation(id) => {
                if let Some(name) = self.stations.remove(&id) {
                    self.by_name.remove(name.as_str());
                }
                self.routes.retain(|(u, v, _)| *u != id && *v != id);
            }
            Action::RemoveStation(id, name, routes) => {
                self.by_name.insert(name.clone(), id);
                self.stations.insert(id, name);
                self.routes.extend(routes);
            }
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let vertices = self.stations.keys().copied().collect::<Vec<_>>();
        self.graph.rebuild(vertices, self.routes.iter().copied());
        let names = Rc::new(self.stations.clone());
        self.graph.set_label_provider(move |id| {
            names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| id.to_string())
        });
    }

    fn report(&self, from: &str, to: &str) {
        let graph = &self.graph;
        let (Some(&s), Some(&e)) = (self.by_name.search(from), self.by_name.search(to)) else {
            println!("unknown station");
            return;
        };
        if let Ok(order) = graph.bfs(s) {
            println!("bfs:   {}", graph.labels(&order).join(" "));
        }
        if let Ok(order) = graph.dfs(s) {
            println!("dfs:   {}", graph.labels(&order).join(" "));
        }
        match graph.dijkstra(s, e) {
            Ok(ShortestPath::Reachable(route)) => println!(
                "route: {} ({} km)",
                graph.labels(&route.path).join(" -> "),
                route.distance
            ),
            Ok(ShortestPath::Unreachable) => println!("route: {to} is unreachable from {from}"),
            Err(error) => println!("route: {error}"),
        }
        let tree = graph.minimum_spanning_tree();
        for edge in &tree.edges {
            println!(
                "mst:   {} - {} : {}",
                graph.label(edge.from),
                graph.label(edge.to),
                edge.weight
            );
        }
        println!("mst:   total {}", tree.total_weight);
        if !tree.is_spanning() {
            println!("mst:   unreached {}", graph.labels(&tree.unreached).join(", "));
        }
        println!("cycle: {}", graph.detect_cycle());
    }
}

fn main() {
    let mut network = Network::new();
    let mut history = Stack::new();

    for (id, name) in [(1, "Saddar"), (2, "Clifton"), (3, "Gulshan"), (4, "Korangi")] {
        history.push(network.add_station(id, name));
    }
    network.add_route("Saddar", "Clifton", 5);
    network.add_route("Clifton", "Gulshan", 3);
    network.add_route("Gulshan", "Korangi", 2);
    network.add_route("Saddar", "Korangi", 12);
    network.rebuild();
    network.report("Saddar", "Korangi");

    println!("\nremoving Clifton");
    if let Some(action) = network.remove_station("Clifton") {
        history.push(action);
    }
    network.report("Saddar", "Gulshan");

    println!("\nundo");
    if let Ok(action) = history.pop() {
        network.undo(action);
    }
    network.report("Saddar", "Korangi");
    print!("{}", network.graph.describe());
}
